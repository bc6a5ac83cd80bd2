use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const MIN_CARD_VALUE: u8 = 2;
pub const MAX_CARD_VALUE: u8 = 10;

/// Set of numbered expedition cards (2-10), each value at most once.
///
/// Stored as a bitmask indexed by face value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct CardSet {
    mask: u16,
}

impl CardSet {
    pub const fn new() -> Self {
        Self { mask: 0 }
    }

    /// Build a set from face values. Duplicates collapse.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut set = Self::new();
        for value in values {
            set.insert(value)?;
        }
        Ok(set)
    }

    /// Insert a face value. Returns false if it was already present.
    pub fn insert(&mut self, value: u8) -> Result<bool> {
        if !(MIN_CARD_VALUE..=MAX_CARD_VALUE).contains(&value) {
            bail!(
                "Card value {} out of range ({}-{})",
                value,
                MIN_CARD_VALUE,
                MAX_CARD_VALUE
            );
        }
        let bit = 1u16 << value;
        let added = self.mask & bit == 0;
        self.mask |= bit;
        Ok(added)
    }

    pub fn contains(&self, value: u8) -> bool {
        value <= MAX_CARD_VALUE && self.mask & (1u16 << value) != 0
    }

    /// Number of distinct cards
    pub fn len(&self) -> u32 {
        self.mask.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Sum of face values
    pub fn sum(&self) -> u32 {
        self.values().map(u32::from).sum()
    }

    /// Face values in ascending order
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        (MIN_CARD_VALUE..=MAX_CARD_VALUE).filter(move |v| self.contains(*v))
    }
}

impl From<CardSet> for Vec<u8> {
    fn from(set: CardSet) -> Self {
        set.values().collect()
    }
}

impl TryFrom<Vec<u8>> for CardSet {
    type Error = anyhow::Error;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        CardSet::from_values(values)
    }
}
