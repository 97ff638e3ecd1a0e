//! Core engine types: RNG, fixed game parameters, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DECK_SIZE, HAND_SIZE, LEVEL_COUNT, LINE_COUNT, SET_SIZE};
pub use error::GameError;
pub use rng::{GameRng, ShuffleSource};
