pub mod cards;
pub mod color;
pub mod round;

pub use cards::{CardSet, MAX_CARD_VALUE, MIN_CARD_VALUE};
pub use color::Color;
pub use round::{Expedition, RoundInput};
