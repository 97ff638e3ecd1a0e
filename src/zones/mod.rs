//! Card locations: the deck's two piles and the hand.
//!
//! ## Key Types
//!
//! - `Deck`: Draw pile and discard pile, with shuffle/draw/discard
//! - `Hand`: Ordered cards in play, each in a stable `SlotId`
//! - `HandSlot`: A card paired with its slot identity
//!
//! Every card of the population is in exactly one of the draw pile, the
//! discard pile or the hand.

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::{Hand, HandSlot, SlotId};
