//! Game session: deck, hand and set search composed into a round of play.
//!
//! A driver creates a `GameSession`, asks it for the sets in the current
//! hand and feeds player choices back through its commands. The session
//! owns all mutable state; there is no global game.

pub mod session;

pub use session::GameSession;
