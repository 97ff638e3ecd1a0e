//! Game parameters and session configuration.
//!
//! The rules of the game are fixed: five line positions per level, three
//! levels per card, five cards per set and a twelve-card hand. These are
//! constants, not configuration. The only thing a session can be configured
//! with is where its randomness comes from.

/// Number of line positions on a pentagon (attribute values `0..=4`).
pub const LINE_COUNT: u8 = 5;

/// Number of pentagon levels (attribute dimensions) on a card.
pub const LEVEL_COUNT: usize = 3;

/// Number of cards in a matching set.
pub const SET_SIZE: usize = 5;

/// Nominal hand size.
pub const HAND_SIZE: usize = 12;

/// Size of the full card population: every combination of line positions.
pub const DECK_SIZE: usize = 125;

/// Session configuration.
///
/// ```
/// use pentaset::core::GameConfig;
///
/// let config = GameConfig::new().with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the shuffle RNG. `None` picks a fresh seed from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create the default configuration (entropy-seeded).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed so the session is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_size_matches_lines() {
        let lines = LINE_COUNT as usize;
        assert_eq!(DECK_SIZE, lines.pow(LEVEL_COUNT as u32));
    }

    #[test]
    fn test_game_config_builder() {
        assert_eq!(GameConfig::new().seed, None);
        assert_eq!(GameConfig::new().with_seed(7).seed, Some(7));
    }
}
