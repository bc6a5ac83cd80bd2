use crate::leaderboard::DEFAULT_CAPACITY;
use crate::scoring::ScoringRules;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYER: &str = "Anonymous";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name recorded when a player leaves theirs blank
    #[serde(default = "default_player")]
    pub default_player: String,

    /// How many scores the leaderboard keeps
    #[serde(default = "default_capacity")]
    pub leaderboard_capacity: usize,

    #[serde(default)]
    pub scoring: Option<ScoringRules>,
}

fn default_player() -> String {
    DEFAULT_PLAYER.to_string()
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_player: default_player(),
            leaderboard_capacity: default_capacity(),
            scoring: None,
        }
    }
}

impl Config {
    /// Scoring rules in effect (standard rules unless overridden)
    pub fn rules(&self) -> ScoringRules {
        self.scoring.clone().unwrap_or_default()
    }
}
