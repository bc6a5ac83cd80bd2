use super::board::{Leaderboard, LeaderboardEntry};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

const SNAPSHOT_VERSION: u32 = 1;

/// Exported view of a leaderboard. Written for other tools to read; a
/// session never loads one back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    #[serde(default)]
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardSnapshot {
    pub fn of(board: &Leaderboard, exported_at: DateTime<Utc>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            exported_at,
            entries: board.snapshot().to_vec(),
        }
    }
}

/// Save the current leaderboard to a JSON file atomically
///
/// Uses atomic-write-file so a crash mid-write never leaves a truncated file.
pub fn export_snapshot(path: &Path, board: &Leaderboard) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    let snapshot = LeaderboardSnapshot::of(board, Utc::now());
    serde_json::to_writer_pretty(&mut file, &snapshot)
        .context("Failed to serialize leaderboard")?;

    file.commit()
        .with_context(|| format!("Failed to save leaderboard to {}", path.display()))?;

    Ok(())
}

/// Load an exported leaderboard
///
/// Fails if the file is missing, malformed, or has an unsupported version.
pub fn read_snapshot(path: &Path) -> Result<LeaderboardSnapshot> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open leaderboard file at {}", path.display()))?;

    let snapshot: LeaderboardSnapshot =
        serde_json::from_reader(file).context("Failed to parse leaderboard file")?;

    if snapshot.version != SNAPSHOT_VERSION {
        anyhow::bail!("Unsupported leaderboard version: {}", snapshot.version);
    }

    Ok(snapshot)
}
