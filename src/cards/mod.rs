//! Card system: line positions, levels, cards and fixed-size groups.
//!
//! ## Key Types
//!
//! - `PentagonLine`: One of five line positions (`0..=4`)
//! - `Level`: Which pentagon on the card (light, medium, dark)
//! - `Card`: Immutable triple of line positions
//! - `CardGroup`: The five cards of a set

pub mod card;

pub use card::{Card, CardGroup, Level, PentagonLine};
