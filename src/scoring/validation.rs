use super::config::ScoringRules;
use crate::model::{Color, RoundInput};
use std::fmt;

/// Reasons a round cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NoColorSelected,
    InvalidWagerCount {
        expedition: Color,
        wager_count: i32,
        max: i32,
    },
    EmptyExpedition {
        expedition: Color,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoColorSelected => write!(f, "Please select at least one color."),
            ValidationError::InvalidWagerCount {
                expedition,
                wager_count,
                max,
            } => write!(
                f,
                "Invalid wager cards for {} expedition ({}). Must be 0-{}.",
                expedition.label(),
                wager_count,
                max
            ),
            ValidationError::EmptyExpedition { expedition } => write!(
                f,
                "No cards or wager cards selected for {} expedition.",
                expedition.label()
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a round before scoring. Checks run in a fixed order and the first
/// failure is returned: empty selection, then wager ranges across every
/// expedition, then expeditions with nothing in them.
pub fn validate_round(input: &RoundInput, rules: &ScoringRules) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::NoColorSelected);
    }

    if let Some(exp) = input
        .expeditions()
        .iter()
        .find(|e| e.wager_count < 0 || e.wager_count > rules.max_wagers)
    {
        return Err(ValidationError::InvalidWagerCount {
            expedition: exp.color,
            wager_count: exp.wager_count,
            max: rules.max_wagers,
        });
    }

    if let Some(exp) = input
        .expeditions()
        .iter()
        .find(|e| e.cards.is_empty() && e.wager_count == 0)
    {
        return Err(ValidationError::EmptyExpedition {
            expedition: exp.color,
        });
    }

    Ok(())
}

/// Upper bound for `max_wagers`
pub const MAX_WAGER_LIMIT: i32 = 10;
/// Upper bound for costs and point values
pub const MAX_POINTS: i64 = 1_000_000;

/// Validate scoring rules loaded from config.
/// Returns all validation errors at once (not just the first).
pub fn validate_rules(rules: &ScoringRules) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_points(&mut errors, "expedition_cost", rules.expedition_cost);
    if !(0..=MAX_WAGER_LIMIT).contains(&rules.max_wagers) {
        errors.push(format!(
            "scoring.max_wagers: must be between 0 and {}",
            MAX_WAGER_LIMIT
        ));
    }
    if rules.bonus_threshold == 0 {
        errors.push("scoring.bonus_threshold: must be at least 1".to_string());
    }
    check_points(&mut errors, "bonus_points", rules.bonus_points);
    check_points(&mut errors, "target_card_points", rules.target_card_points);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_points(errors: &mut Vec<String>, field: &str, value: i64) {
    if value < 0 {
        errors.push(format!("scoring.{}: must be non-negative", field));
    } else if value > MAX_POINTS {
        errors.push(format!("scoring.{}: must be at most {}", field, MAX_POINTS));
    }
}
