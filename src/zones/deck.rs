//! Deck: the draw pile and the discard pile.
//!
//! The deck owns every card that is not currently in a hand. It starts with
//! all 125 cards in the draw pile in canonical order and only changes
//! through [`Deck::shuffle`], [`Deck::draw`] and [`Deck::discard`].
//!
//! ## Usage
//!
//! ```
//! use pentaset::core::GameRng;
//! use pentaset::zones::Deck;
//!
//! let mut deck = Deck::new();
//! deck.shuffle(&mut GameRng::new(42));
//!
//! let hand = deck.draw(12);
//! assert_eq!(hand.len(), 12);
//! assert_eq!(deck.cards_remaining(), 113);
//!
//! deck.discard(hand);
//! assert_eq!(deck.total_cards_available(), 125);
//! ```

use tracing::warn;

use crate::cards::{Card, PentagonLine};
use crate::core::config::DECK_SIZE;
use crate::core::rng::ShuffleSource;

/// Draw pile plus discard pile.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Draw pile. Index 0 is the next card drawn.
    cards: Vec<Card>,
    /// Discard pile, in the order cards were discarded.
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Create a deck holding every card in canonical order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Self::generate(),
            discard_pile: Vec::new(),
        }
    }

    /// Every card, nested light, then medium, then dark, each increasing.
    #[must_use]
    pub fn generate() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for light in PentagonLine::ALL {
            for medium in PentagonLine::ALL {
                for dark in PentagonLine::ALL {
                    cards.push(Card::from_lines([light, medium, dark]));
                }
            }
        }
        cards
    }

    /// Shuffle the draw pile in place (Fisher-Yates).
    ///
    /// Walks from the last index down to 1, swapping each position with an
    /// index drawn from `[0, i]`. Unbiased as long as `source` is uniform.
    /// The discard pile is not touched.
    pub fn shuffle<S: ShuffleSource + ?Sized>(&mut self, source: &mut S) {
        for i in (1..self.cards.len()).rev() {
            let j = source.index_inclusive(i);
            self.cards.swap(i, j);
        }
    }

    /// Take up to `count` cards from the front of the draw pile.
    ///
    /// Returns fewer cards (possibly none) when the draw pile runs short.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let available = count.min(self.cards.len());
        if available < count {
            warn!(requested = count, available, "draw pile ran short");
        }
        self.cards.drain(..available).collect()
    }

    /// Append cards to the discard pile, keeping their order.
    ///
    /// The deck does not check where the cards came from.
    pub fn discard<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.discard_pile.extend(cards);
    }

    /// Number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Draw pile plus discard pile. Cards in a hand are not counted.
    #[must_use]
    pub fn total_cards_available(&self) -> usize {
        self.cards.len() + self.discard_pile.len()
    }

    /// Snapshot of the draw pile, next card first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Snapshot of the discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> Vec<Card> {
        self.discard_pile.clone()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
