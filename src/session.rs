use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::leaderboard::Leaderboard;
use crate::model::RoundInput;
use crate::scoring::{compute_score_with, ScoreBreakdown, ScoringRules, ValidationError};

/// Result of a successfully scored round.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub player: String,
    pub breakdown: ScoreBreakdown,
    /// 1-based leaderboard position, None if the score did not make the cut
    pub rank: Option<usize>,
}

/// State owned by one scoring session: the rules, the leaderboard and the
/// name used for anonymous submissions.
#[derive(Debug, Clone)]
pub struct Session {
    rules: ScoringRules,
    leaderboard: Leaderboard,
    default_player: String,
    last_player: Option<String>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            rules: config.rules(),
            leaderboard: Leaderboard::with_capacity(config.leaderboard_capacity),
            default_player: config.default_player.clone(),
            last_player: None,
        }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Name offered at the next round's prompt: whoever last scored a round,
    /// falling back to the configured default
    pub fn suggested_player(&self) -> &str {
        self.last_player.as_deref().unwrap_or(&self.default_player)
    }

    /// Trimmed player name, or the default when blank
    pub fn player_name(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.default_player.clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Score a round and record it on the leaderboard.
    ///
    /// A round that fails validation leaves the leaderboard untouched.
    pub fn score_round(
        &mut self,
        player: &str,
        input: &RoundInput,
        at: DateTime<Utc>,
    ) -> Result<RoundOutcome, ValidationError> {
        let breakdown = compute_score_with(input, &self.rules)?;
        let player = self.player_name(player);
        let rank = self
            .leaderboard
            .submit(player.clone(), breakdown.final_total, at);
        self.last_player = Some(player.clone());

        Ok(RoundOutcome {
            player,
            breakdown,
            rank,
        })
    }

    /// Empty the leaderboard. The suggested player name is kept.
    pub fn clear_leaderboard(&mut self) {
        self.leaderboard.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardSet, Color, Expedition};
    use chrono::Duration;

    fn round(color: Color, cards: &[u8], wagers: i32, targets: u32) -> RoundInput {
        let mut input = RoundInput::new().with_target_cards(targets);
        input.insert(
            Expedition::new(color)
                .with_cards(CardSet::from_values(cards.iter().copied()).unwrap())
                .with_wagers(wagers),
        );
        input
    }

    #[test]
    fn test_blank_name_uses_default() {
        let mut session = Session::new(&Config::default());
        let outcome = session
            .score_round("   ", &round(Color::Red, &[10], 0, 0), Utc::now())
            .unwrap();
        assert_eq!(outcome.player, "Anonymous");
        assert_eq!(session.leaderboard().snapshot()[0].player, "Anonymous");
    }

    #[test]
    fn test_name_is_trimmed() {
        let session = Session::new(&Config::default());
        assert_eq!(session.player_name("  Mia "), "Mia");
    }

    #[test]
    fn test_configured_default_player() {
        let config = Config {
            default_player: "Guest".to_string(),
            ..Config::default()
        };
        let session = Session::new(&config);
        assert_eq!(session.player_name(""), "Guest");
    }

    #[test]
    fn test_score_round_submits_final_total() {
        let mut session = Session::new(&Config::default());
        let outcome = session
            .score_round("Ana", &round(Color::Green, &[3, 4, 5], 2, 3), Utc::now())
            .unwrap();
        // -24 + 30
        assert_eq!(outcome.breakdown.final_total, 6);
        assert_eq!(outcome.rank, Some(1));
        assert_eq!(session.leaderboard().snapshot()[0].score, 6);
    }

    #[test]
    fn test_failed_round_leaves_leaderboard_untouched() {
        let mut session = Session::new(&Config::default());
        session
            .score_round("Ana", &round(Color::Red, &[9], 0, 0), Utc::now())
            .unwrap();

        let err = session
            .score_round("Ben", &RoundInput::new(), Utc::now())
            .unwrap_err();
        assert_eq!(err, ValidationError::NoColorSelected);

        let err = session
            .score_round("Ben", &round(Color::Blue, &[], 0, 2), Utc::now())
            .unwrap_err();
        assert!(matches!(err, ValidationError::EmptyExpedition { .. }));

        assert_eq!(session.leaderboard().len(), 1);
        assert_eq!(session.leaderboard().snapshot()[0].player, "Ana");
    }

    #[test]
    fn test_capacity_from_config() {
        let config = Config {
            leaderboard_capacity: 2,
            ..Config::default()
        };
        let mut session = Session::new(&config);
        let start = Utc::now();
        for i in 0..3 {
            session
                .score_round(
                    "p",
                    &round(Color::Red, &[10], 0, i),
                    start + Duration::seconds(i as i64),
                )
                .unwrap();
        }
        assert_eq!(session.leaderboard().len(), 2);
        // Lowest total (0 targets) was evicted
        assert_eq!(session.leaderboard().snapshot()[1].score, 0);
    }

    #[test]
    fn test_clear_leaderboard() {
        let mut session = Session::new(&Config::default());
        session
            .score_round("Ana", &round(Color::Red, &[9], 1, 0), Utc::now())
            .unwrap();
        session.clear_leaderboard();
        assert!(session.leaderboard().is_empty());
    }

    #[test]
    fn test_suggested_player_follows_last_round() {
        let mut session = Session::new(&Config::default());
        assert_eq!(session.suggested_player(), "Anonymous");

        session
            .score_round(" Mia ", &round(Color::Red, &[9], 0, 0), Utc::now())
            .unwrap();
        assert_eq!(session.suggested_player(), "Mia");

        // A rejected round keeps the previous name
        session
            .score_round("Ben", &RoundInput::new(), Utc::now())
            .unwrap_err();
        assert_eq!(session.suggested_player(), "Mia");

        session.clear_leaderboard();
        assert_eq!(session.suggested_player(), "Mia");
    }
}
