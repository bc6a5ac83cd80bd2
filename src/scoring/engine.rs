use super::config::ScoringRules;
use super::validation::{validate_round, ValidationError};
use crate::model::{Color, Expedition, RoundInput};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpeditionScore {
    pub color: Color,
    pub card_count: u32,
    pub card_sum: u32,
    pub wager_count: i32,
    pub multiplier: i64, // wager_count + 1, or 1 without wagers
    pub bonus: bool,     // whether the bonus points were added
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub expeditions: Vec<ExpeditionScore>,
    pub expedition_total: i64,
    pub target_cards: u32,
    pub target_score: i64,
    pub final_total: i64,
}

/// Score a round under the standard rules.
pub fn compute_score(input: &RoundInput) -> Result<ScoreBreakdown, ValidationError> {
    compute_score_with(input, &ScoringRules::default())
}

/// Score a round under the given rules.
///
/// All-or-nothing: the round is validated up front and nothing is computed
/// unless it passes.
pub fn compute_score_with(
    input: &RoundInput,
    rules: &ScoringRules,
) -> Result<ScoreBreakdown, ValidationError> {
    validate_round(input, rules)?;

    let expeditions: Vec<ExpeditionScore> = input
        .expeditions()
        .iter()
        .map(|exp| score_expedition(exp, rules))
        .collect();

    // Saturating so rules that skipped validate_rules cannot overflow
    let expedition_total = expeditions
        .iter()
        .fold(0i64, |total, e| total.saturating_add(e.score));
    let target_score = i64::from(input.target_cards).saturating_mul(rules.target_card_points);

    Ok(ScoreBreakdown {
        expeditions,
        expedition_total,
        target_cards: input.target_cards,
        target_score,
        final_total: expedition_total.saturating_add(target_score),
    })
}

fn score_expedition(exp: &Expedition, rules: &ScoringRules) -> ExpeditionScore {
    let card_count = exp.cards.len();
    let card_sum = exp.cards.sum();
    let wagers = i64::from(exp.wager_count);
    let multiplier = if wagers > 0 { wagers + 1 } else { 1 };
    let mut bonus = false;

    let score = if card_count > 0 {
        let mut score = i64::from(card_sum)
            .saturating_sub(rules.expedition_cost)
            .saturating_mul(multiplier);
        // Bonus counts wager cards too and lands after the multiplier
        if i64::from(card_count) + wagers >= i64::from(rules.bonus_threshold) {
            score = score.saturating_add(rules.bonus_points);
            bonus = true;
        }
        score
    } else {
        // Wagers without number cards: each wager costs a full expedition,
        // then the multiplier applies on top
        rules
            .expedition_cost
            .saturating_mul(wagers)
            .saturating_mul(multiplier)
            .saturating_neg()
    };

    ExpeditionScore {
        color: exp.color,
        card_count,
        card_sum,
        wager_count: exp.wager_count,
        multiplier,
        bonus,
        score,
    }
}
