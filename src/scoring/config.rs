use serde::{Deserialize, Serialize};

/// Scoring constants for a round.
///
/// Defaults are the standard game rules. Any field left out of the YAML
/// falls back to its default.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   expedition_cost: 20
///   max_wagers: 3
///   bonus_threshold: 8
///   bonus_points: 20
///   target_card_points: 10
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringRules {
    /// Cost subtracted from every started expedition (default: 20)
    pub expedition_cost: i64,

    /// Highest wager count accepted per expedition (default: 3)
    pub max_wagers: i32,

    /// Combined card + wager count that earns the bonus (default: 8)
    pub bonus_threshold: u32,

    /// Flat bonus added after the multiplier (default: 20)
    pub bonus_points: i64,

    /// Points per target card (default: 10)
    pub target_card_points: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            expedition_cost: 20,
            max_wagers: 3,
            bonus_threshold: 8,
            bonus_points: 20,
            target_card_points: 10,
        }
    }
}
