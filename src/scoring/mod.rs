pub mod config;
pub mod engine;
pub mod validation;

pub use config::ScoringRules;
pub use engine::{compute_score, compute_score_with, ExpeditionScore, ScoreBreakdown};
pub use validation::{
    validate_round, validate_rules, ValidationError, MAX_POINTS, MAX_WAGER_LIMIT,
};
