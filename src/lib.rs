//! # pentaset
//!
//! Rule engine for a SET-like matching game played on pentagon lines.
//!
//! Every card shows three pentagons (light, medium, dark), each with a line
//! to one of its five corners. The deck holds all 125 combinations. Five
//! cards form a set when, on every level, their line positions sum to a
//! multiple of five.
//!
//! ## Design Principles
//!
//! 1. **Fixed Rules**: Hand size, set size and the validity rule are game
//!    constants, not configuration.
//!
//! 2. **No Global Game**: A `GameSession` is an ordinary value. Independent
//!    games use independent sessions.
//!
//! 3. **Graceful Engine**: Deck and search never fail. Running out of cards
//!    yields a shorter hand; malformed groups are simply not sets.
//!
//! 4. **Replayable**: All randomness goes through a seeded RNG.
//!
//! ## Modules
//!
//! - `core`: RNG, fixed parameters, configuration, errors
//! - `cards`: Card value model
//! - `zones`: Deck piles and the hand
//! - `rules`: Set validity and set search
//! - `game`: Game session

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, ShuffleSource,
    DECK_SIZE, HAND_SIZE, LEVEL_COUNT, LINE_COUNT, SET_SIZE,
};

pub use crate::cards::{Card, CardGroup, Level, PentagonLine};

pub use crate::zones::{Deck, Hand, HandSlot, SlotId};

pub use crate::rules::{completing_card, count_sets, find_sets, is_valid_set, level_sums, SymmetryGroup};

pub use crate::game::GameSession;
