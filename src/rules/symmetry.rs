//! Set validity and set search.
//!
//! Five cards form a set when, on every level independently, their line
//! positions sum to a multiple of five. Any other group size is never a
//! set. Search walks every 5-position combination of the hand in
//! lexicographic order (`i < j < k < l < m`), so identical hands always
//! produce identical results in identical order.
//!
//! ```
//! use pentaset::cards::Card;
//! use pentaset::rules::{find_sets, is_valid_set};
//!
//! let hand: Vec<Card> = (0..5).map(|x| Card::new(x, 0, 0).unwrap()).collect();
//! assert!(is_valid_set(&hand));
//!
//! let sets = find_sets(&hand);
//! assert_eq!(sets.len(), 1);
//! assert_eq!(sets[0].positions, [0, 1, 2, 3, 4]);
//! ```

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::cards::{Card, CardGroup, Level, PentagonLine};
use crate::core::config::{LEVEL_COUNT, LINE_COUNT, SET_SIZE};

/// A valid set found in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymmetryGroup {
    /// Hand positions of the members, ascending.
    pub positions: [usize; SET_SIZE],
    /// The member cards, in position order.
    pub cards: CardGroup,
}

/// Per-level sums of the cards' line positions, reduced mod 5.
#[must_use]
pub fn level_sums(cards: &[Card]) -> [u8; LEVEL_COUNT] {
    Level::ALL.map(|level| {
        cards
            .iter()
            .fold(0, |sum, card| (sum + card.line(level).value()) % LINE_COUNT)
    })
}

/// Check whether `cards` is a set.
///
/// Exactly five cards whose line positions sum to 0 mod 5 on every level.
/// Order of the cards does not matter. Any other size returns `false`.
#[must_use]
pub fn is_valid_set(cards: &[Card]) -> bool {
    cards.len() == SET_SIZE && level_sums(cards) == [0; LEVEL_COUNT]
}

/// Index combinations of the hand that form sets, lexicographic order.
fn set_positions(hand: &[Card]) -> impl Iterator<Item = Vec<usize>> + '_ {
    (0..hand.len())
        .combinations(SET_SIZE)
        .filter(move |positions| {
            let group: SmallVec<[Card; SET_SIZE]> = positions.iter().map(|&i| hand[i]).collect();
            is_valid_set(&group)
        })
}

/// Find every set in the hand.
///
/// Hand slots are distinct members even if two of them hold the same card
/// value. Fewer than five cards yield an empty result.
#[must_use]
pub fn find_sets(hand: &[Card]) -> Vec<SymmetryGroup> {
    let sets: Vec<SymmetryGroup> = set_positions(hand)
        .map(|positions| {
            let positions: [usize; SET_SIZE] = std::array::from_fn(|n| positions[n]);
            SymmetryGroup {
                positions,
                cards: positions.map(|i| hand[i]),
            }
        })
        .collect();

    trace!(hand_size = hand.len(), sets = sets.len(), "searched hand for sets");
    sets
}

/// Count the sets in the hand without collecting them.
#[must_use]
pub fn count_sets(hand: &[Card]) -> usize {
    set_positions(hand).count()
}

/// The one card that would complete four cards into a set.
///
/// Returns `None` unless exactly four cards are given. The result may be
/// one of the four cards themselves, or a card that is not available.
#[must_use]
pub fn completing_card(cards: &[Card]) -> Option<Card> {
    if cards.len() != SET_SIZE - 1 {
        return None;
    }

    let lines = level_sums(cards)
        .map(|sum| PentagonLine::ALL[usize::from((LINE_COUNT - sum) % LINE_COUNT)]);
    Some(Card::from_lines(lines))
}
