//! The hand: the ordered working set of cards in play.
//!
//! Every card that enters the hand gets a fresh [`SlotId`]. Slot ids are
//! never reused within a hand, so a slot id taken from an earlier snapshot
//! either still names the same card or is no longer in the hand at all.
//! Positions (0-based indices) are also supported, but they shift whenever
//! cards are removed.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::HAND_SIZE;
use crate::core::error::GameError;

/// Stable identity of one card's stay in the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u32);

impl SlotId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// A card held in the hand together with its slot identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSlot {
    pub id: SlotId,
    pub card: Card,
}

/// Ordered cards in play.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    slots: SmallVec<[HandSlot; HAND_SIZE]>,
    next_slot: u32,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in hand order.
    #[must_use]
    pub fn slots(&self) -> &[HandSlot] {
        &self.slots
    }

    /// Snapshot of the cards in hand order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().map(|slot| slot.card).collect()
    }

    /// Append cards to the end of the hand, each in a fresh slot.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        for card in cards {
            let id = SlotId(self.next_slot);
            self.next_slot += 1;
            self.slots.push(HandSlot { id, card });
        }
    }

    /// Position of the slot with the given id.
    #[must_use]
    pub fn position_of_slot(&self, id: SlotId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == id)
    }

    /// First position holding `card` that is not already in `claimed`.
    #[must_use]
    pub fn position_of_card(&self, card: Card, claimed: &[usize]) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .position(|(i, slot)| slot.card == card && !claimed.contains(&i))
    }

    /// Remove the cards at the given positions.
    ///
    /// Fails without changing the hand if a position is out of range or
    /// repeated. Removal runs from the highest position down so lower
    /// positions stay valid. The removed cards are returned in the order the
    /// positions were given.
    pub fn remove_positions(&mut self, positions: &[usize]) -> Result<Vec<Card>, GameError> {
        let len = self.slots.len();
        let mut seen = FxHashSet::default();
        for &index in positions {
            if index >= len {
                return Err(GameError::PositionOutOfRange { index, len });
            }
            if !seen.insert(index) {
                return Err(GameError::DuplicatePosition(index));
            }
        }

        let removed: Vec<Card> = positions.iter().map(|&i| self.slots[i].card).collect();

        let mut descending = positions.to_vec();
        descending.sort_unstable_by(|a, b| b.cmp(a));
        for i in descending {
            self.slots.remove(i);
        }

        Ok(removed)
    }

    /// Empty the hand, returning its cards in hand order.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.slots.drain(..).map(|slot| slot.card).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: u8) -> Vec<Card> {
        (0..n).map(|i| Card::new(i % 5, i / 5, 0).unwrap()).collect()
    }

    #[test]
    fn test_extend_assigns_fresh_slots() {
        let mut hand = Hand::new();
        hand.extend(cards(3));
        hand.extend(cards(2));

        let ids: Vec<_> = hand.slots().iter().map(|s| s.id.raw()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(hand.len(), 5);
    }

    #[test]
    fn test_slot_ids_not_reused() {
        let mut hand = Hand::new();
        hand.extend(cards(3));

        let removed = hand.remove_positions(&[2]).unwrap();
        hand.extend(removed);

        assert_eq!(hand.slots()[2].id, SlotId(3));
        assert_eq!(hand.position_of_slot(SlotId(2)), None);
        assert_eq!(hand.position_of_slot(SlotId(3)), Some(2));
    }

    #[test]
    fn test_remove_positions_keeps_order() {
        let all = cards(6);
        let mut hand = Hand::new();
        hand.extend(all.clone());

        let removed = hand.remove_positions(&[1, 4, 2]).unwrap();

        assert_eq!(removed, vec![all[1], all[4], all[2]]);
        assert_eq!(hand.cards(), vec![all[0], all[3], all[5]]);
    }

    #[test]
    fn test_remove_positions_rejects_out_of_range() {
        let all = cards(4);
        let mut hand = Hand::new();
        hand.extend(all.clone());

        assert_eq!(
            hand.remove_positions(&[1, 4]),
            Err(GameError::PositionOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(hand.cards(), all);
    }

    #[test]
    fn test_remove_positions_rejects_duplicates() {
        let all = cards(5);
        let mut hand = Hand::new();
        hand.extend(all.clone());

        assert_eq!(
            hand.remove_positions(&[2, 0, 2]),
            Err(GameError::DuplicatePosition(2))
        );
        assert_eq!(hand.cards(), all);
    }

    #[test]
    fn test_position_of_card_skips_claimed() {
        let card = Card::new(2, 2, 2).unwrap();
        let mut hand = Hand::new();
        hand.extend([card, Card::new(0, 0, 0).unwrap(), card]);

        assert_eq!(hand.position_of_card(card, &[]), Some(0));
        assert_eq!(hand.position_of_card(card, &[0]), Some(2));
        assert_eq!(hand.position_of_card(card, &[0, 2]), None);
    }

    #[test]
    fn test_take_all() {
        let all = cards(4);
        let mut hand = Hand::new();
        hand.extend(all.clone());

        assert_eq!(hand.take_all(), all);
        assert!(hand.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SlotId(7)), "Slot(7)");
    }
}
