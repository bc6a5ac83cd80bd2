use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: String,
    pub score: i64,
    pub submitted_at: DateTime<Utc>,
}

/// Ranked, size-bounded score history for one session.
///
/// Entries are kept sorted by score (highest first). Equal scores rank by
/// submission time, earliest first, so a later tie never overtakes an
/// earlier one.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record a score, re-rank everything and drop whatever falls past
    /// capacity.
    ///
    /// Returns the 1-based rank of the new entry, or None if it was evicted
    /// straight away.
    pub fn submit(
        &mut self,
        player: impl Into<String>,
        score: i64,
        at: DateTime<Utc>,
    ) -> Option<usize> {
        let entry = LeaderboardEntry {
            player: player.into(),
            score,
            submitted_at: at,
        };
        self.entries.push(entry.clone());

        // Stable sort: an identical entry submitted earlier stays ahead
        self.entries.sort_by(rank_order);
        let rank = self.entries.iter().rposition(|e| *e == entry);
        self.entries.truncate(self.capacity);

        rank.filter(|idx| *idx < self.capacity).map(|idx| idx + 1)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in rank order
    pub fn snapshot(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Score descending, then submission time ascending.
fn rank_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.submitted_at.cmp(&b.submitted_at))
}
