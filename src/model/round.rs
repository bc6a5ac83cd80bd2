use super::cards::CardSet;
use super::color::Color;
use serde::{Deserialize, Serialize};

/// One color's committed cards for the round.
///
/// `wager_count` is signed so that out-of-range input survives until
/// validation can report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expedition {
    pub color: Color,
    #[serde(default)]
    pub cards: CardSet,
    #[serde(default)]
    pub wager_count: i32,
}

impl Expedition {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            cards: CardSet::new(),
            wager_count: 0,
        }
    }

    pub fn with_cards(mut self, cards: CardSet) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_wagers(mut self, wager_count: i32) -> Self {
        self.wager_count = wager_count;
        self
    }
}

/// Everything needed to score one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundInput {
    expeditions: Vec<Expedition>,
    pub target_cards: u32,
}

impl RoundInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_cards(mut self, target_cards: u32) -> Self {
        self.target_cards = target_cards;
        self
    }

    /// Select a color, returning its expedition. Selecting an already
    /// selected color returns the existing entry.
    pub fn select(&mut self, color: Color) -> &mut Expedition {
        let idx = match self.expeditions.iter().position(|e| e.color == color) {
            Some(idx) => idx,
            None => {
                self.expeditions.push(Expedition::new(color));
                self.expeditions.len() - 1
            }
        };
        &mut self.expeditions[idx]
    }

    /// Insert an expedition, replacing any existing one of the same color
    /// in place.
    pub fn insert(&mut self, expedition: Expedition) {
        let slot = self.select(expedition.color);
        *slot = expedition;
    }

    pub fn is_selected(&self, color: Color) -> bool {
        self.expeditions.iter().any(|e| e.color == color)
    }

    /// Selected expeditions in selection order
    pub fn expeditions(&self) -> &[Expedition] {
        &self.expeditions
    }

    pub fn is_empty(&self) -> bool {
        self.expeditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_keeps_selection_order() {
        let mut round = RoundInput::new();
        round.select(Color::Blue);
        round.select(Color::Red);
        let colors: Vec<_> = round.expeditions().iter().map(|e| e.color).collect();
        assert_eq!(colors, vec![Color::Blue, Color::Red]);
    }

    #[test]
    fn test_select_same_color_twice_is_unique() {
        let mut round = RoundInput::new();
        round.select(Color::Green).wager_count = 2;
        let again = round.select(Color::Green);
        assert_eq!(again.wager_count, 2);
        assert_eq!(round.expeditions().len(), 1);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut round = RoundInput::new();
        round.select(Color::Red);
        round.select(Color::Yellow);
        round.insert(Expedition::new(Color::Red).with_wagers(1));
        assert_eq!(round.expeditions()[0].color, Color::Red);
        assert_eq!(round.expeditions()[0].wager_count, 1);
        assert_eq!(round.expeditions().len(), 2);
    }
}
