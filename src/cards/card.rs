//! Card value model.
//!
//! A card shows three pentagons (light, medium, dark). Each pentagon has a
//! line drawn from its center to one of its five corners, so a card is an
//! ordered triple of line positions in `0..=4`.
//!
//! Cards are immutable values: they are only ever copied between the draw
//! pile, the hand and the discard pile.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::{LEVEL_COUNT, LINE_COUNT, SET_SIZE};
use crate::core::error::GameError;

/// Position of a pentagon's line, `0..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PentagonLine(u8);

impl PentagonLine {
    /// Every line position, in increasing order.
    pub const ALL: [PentagonLine; LINE_COUNT as usize] = [
        PentagonLine(0),
        PentagonLine(1),
        PentagonLine(2),
        PentagonLine(3),
        PentagonLine(4),
    ];

    /// Create a line position, or `None` if `value` is not in `0..=4`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < LINE_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw position.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PentagonLine {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(GameError::LineOutOfRange(value))
    }
}

impl From<PentagonLine> for u8 {
    fn from(line: PentagonLine) -> Self {
        line.0
    }
}

/// One of the three pentagons on a card, in card order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Light,
    Medium,
    Dark,
}

impl Level {
    /// All levels, in card order.
    pub const ALL: [Level; LEVEL_COUNT] = [Level::Light, Level::Medium, Level::Dark];

    /// Index of this level within a card.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Level::Light => 0,
            Level::Medium => 1,
            Level::Dark => 2,
        }
    }
}

/// A card: one line position per level.
///
/// Two cards are equal iff all three positions are equal.
///
/// ```
/// use pentaset::cards::{Card, Level};
///
/// let card = Card::new(0, 3, 4).unwrap();
/// assert_eq!(card.line(Level::Medium).value(), 3);
/// assert_eq!(card.to_string(), "(0,3,4)");
///
/// assert!(Card::new(5, 0, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card([PentagonLine; LEVEL_COUNT]);

impl Card {
    /// Create a card from raw light, medium and dark positions.
    pub fn new(light: u8, medium: u8, dark: u8) -> Result<Self, GameError> {
        Ok(Self([
            PentagonLine::try_from(light)?,
            PentagonLine::try_from(medium)?,
            PentagonLine::try_from(dark)?,
        ]))
    }

    /// Create a card from already-validated line positions.
    #[must_use]
    pub const fn from_lines(lines: [PentagonLine; LEVEL_COUNT]) -> Self {
        Self(lines)
    }

    /// Line position at the given level.
    #[must_use]
    pub const fn line(self, level: Level) -> PentagonLine {
        self.0[level.index()]
    }

    /// All three line positions, light first.
    #[must_use]
    pub const fn lines(self) -> [PentagonLine; LEVEL_COUNT] {
        self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [light, medium, dark] = self.0;
        write!(f, "({},{},{})", light.0, medium.0, dark.0)
    }
}

/// The five cards of a set, as a fixed-size group.
pub type CardGroup = [Card; SET_SIZE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_range() {
        for v in 0..5 {
            assert_eq!(PentagonLine::new(v).map(PentagonLine::value), Some(v));
        }
        assert_eq!(PentagonLine::new(5), None);
        assert_eq!(PentagonLine::try_from(9), Err(GameError::LineOutOfRange(9)));
    }

    #[test]
    fn test_card_new_rejects_each_level() {
        assert_eq!(Card::new(5, 0, 0), Err(GameError::LineOutOfRange(5)));
        assert_eq!(Card::new(0, 6, 0), Err(GameError::LineOutOfRange(6)));
        assert_eq!(Card::new(0, 0, 255), Err(GameError::LineOutOfRange(255)));
    }

    #[test]
    fn test_card_levels() {
        let card = Card::new(1, 2, 4).unwrap();

        assert_eq!(card.line(Level::Light).value(), 1);
        assert_eq!(card.line(Level::Medium).value(), 2);
        assert_eq!(card.line(Level::Dark).value(), 4);
        assert_eq!(card.lines().map(PentagonLine::value), [1, 2, 4]);
    }

    #[test]
    fn test_card_equality_is_componentwise() {
        let a = Card::new(1, 2, 3).unwrap();
        let b = Card::from_lines([PentagonLine::ALL[1], PentagonLine::ALL[2], PentagonLine::ALL[3]]);
        let c = Card::new(1, 2, 4).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_level_index_matches_order() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(0, 4, 2).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "[0,4,2]");

        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);

        assert!(serde_json::from_str::<Card>("[0,5,2]").is_err());
    }
}
