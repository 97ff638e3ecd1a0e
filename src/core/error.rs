//! Errors for caller-supplied input the core refuses to act on.
//!
//! The deck and the set-search engine never fail: they return fewer cards,
//! `false` or an empty list. Errors only come from session commands that
//! name cards, slots or hand positions, and those commands leave the session
//! untouched when they return an error.

use thiserror::Error;

use crate::cards::Card;
use crate::zones::SlotId;

/// Reasons a card value or a session command is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A pentagon line value outside `0..=4`.
    #[error("pentagon line {0} is out of range 0..=4")]
    LineOutOfRange(u8),

    /// A group that should have a fixed number of members has another size.
    #[error("expected {expected} cards, got {actual}")]
    WrongGroupSize { expected: usize, actual: usize },

    /// A card value that is not (or no longer) held in the hand.
    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),

    /// A hand slot that is not (or no longer) held in the hand.
    #[error("{0} is not in the hand")]
    UnknownSlot(SlotId),

    /// The same hand slot was named more than once.
    #[error("{0} was selected more than once")]
    DuplicateSlot(SlotId),

    /// The cards do not satisfy the modular-sum rule.
    #[error("cards do not form a valid set")]
    NotASet,

    /// A hand position past the end of the hand.
    #[error("hand position {index} is out of range for a hand of {len}")]
    PositionOutOfRange { index: usize, len: usize },

    /// The same hand position was selected more than once.
    #[error("hand position {0} was selected more than once")]
    DuplicatePosition(usize),
}
