//! Game session: one deck and one hand driven through a round of play.

use tracing::debug;

use crate::cards::Card;
use crate::core::config::{GameConfig, HAND_SIZE, SET_SIZE};
use crate::core::error::GameError;
use crate::core::rng::GameRng;
use crate::rules::{find_sets, is_valid_set, SymmetryGroup};
use crate::zones::{Deck, Hand, HandSlot, SlotId};

/// A single game in progress.
///
/// The session is the only owner of its deck and hand. Queries return
/// snapshots; commands are the only way the piles and the hand change.
///
/// ```
/// use pentaset::GameSession;
///
/// let mut game = GameSession::from_seed(42);
/// assert_eq!(game.hand().len(), 12);
/// assert_eq!(game.cards_remaining(), 113);
///
/// game.redraw_hand();
/// assert_eq!(game.discard_pile().len(), 12);
/// assert_eq!(game.cards_remaining(), 101);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    deck: Deck,
    hand: Hand,
    rng: GameRng,
}

impl GameSession {
    /// Start a game with an entropy-seeded shuffle.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Start a reproducible game from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_config(&GameConfig::new().with_seed(seed))
    }

    /// Start a game: build and shuffle the deck, then deal a hand.
    #[must_use]
    pub fn with_config(config: &GameConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut hand = Hand::new();
        hand.extend(deck.draw(HAND_SIZE));

        debug!(seed = rng.seed(), hand = hand.len(), "game started");
        Self { deck, hand, rng }
    }

    // === Queries ===

    /// Seed of the shuffle RNG, for replaying this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Snapshot of the hand's cards, in hand order.
    #[must_use]
    pub fn hand(&self) -> Vec<Card> {
        self.hand.cards()
    }

    /// Snapshot of the hand with slot identities.
    #[must_use]
    pub fn hand_slots(&self) -> Vec<HandSlot> {
        self.hand.slots().to_vec()
    }

    /// Read-only view of the deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Snapshot of the draw pile.
    #[must_use]
    pub fn draw_pile(&self) -> Vec<Card> {
        self.deck.cards()
    }

    /// Snapshot of the discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> Vec<Card> {
        self.deck.discard_pile()
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.cards_remaining()
    }

    /// Every set in the current hand.
    #[must_use]
    pub fn find_all_sets(&self) -> Vec<SymmetryGroup> {
        find_sets(&self.hand.cards())
    }

    /// Check if the current hand holds at least one set.
    #[must_use]
    pub fn has_valid_sets(&self) -> bool {
        !self.find_all_sets().is_empty()
    }

    /// The draw pile is empty and the hand holds no set.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.cards_remaining() == 0 && !self.has_valid_sets()
    }

    // === Commands ===

    /// Discard the whole hand and deal a fresh one.
    ///
    /// Unconditional, whether or not the old hand held a set. The new hand
    /// is short if the draw pile runs out.
    pub fn redraw_hand(&mut self) {
        self.deck.discard(self.hand.take_all());
        self.refill(HAND_SIZE);

        debug!(hand = self.hand.len(), remaining = self.deck.cards_remaining(), "hand redrawn");
    }

    /// Remove a set given by card values, then refill the hand.
    ///
    /// Each card is matched to the first hand slot holding that value that
    /// is not already matched. Fails without changing anything if the group
    /// is not five cards, a card is not in the hand, or the cards are not a
    /// set.
    pub fn remove_set(&mut self, cards: &[Card]) -> Result<(), GameError> {
        check_group_size(cards.len())?;

        let mut positions = Vec::with_capacity(SET_SIZE);
        for &card in cards {
            let position = self
                .hand
                .position_of_card(card, &positions)
                .ok_or(GameError::CardNotInHand(card))?;
            positions.push(position);
        }

        self.claim_set(&positions)
    }

    /// Remove a set given by hand slots, then refill the hand.
    ///
    /// Fails without changing anything if the group is not five distinct
    /// slots, a slot is no longer in the hand, or its cards are not a set.
    pub fn remove_slots(&mut self, slots: &[SlotId]) -> Result<(), GameError> {
        check_group_size(slots.len())?;

        let mut positions = Vec::with_capacity(SET_SIZE);
        for &slot in slots {
            let position = self
                .hand
                .position_of_slot(slot)
                .ok_or(GameError::UnknownSlot(slot))?;
            if positions.contains(&position) {
                return Err(GameError::DuplicateSlot(slot));
            }
            positions.push(position);
        }

        self.claim_set(&positions)
    }

    /// Replace the cards at the given hand positions.
    ///
    /// A voluntary swap that does not care whether the cards form a set. The
    /// removed cards go to the discard pile in the order given and the same
    /// number of new cards are appended to the end of the hand. Fails without
    /// changing anything if a position is out of range or repeated.
    pub fn replace_cards(&mut self, positions: &[usize]) -> Result<(), GameError> {
        let removed = self.hand.remove_positions(positions)?;
        self.deck.discard(removed);
        self.refill(positions.len());

        debug!(replaced = positions.len(), hand = self.hand.len(), "cards replaced");
        Ok(())
    }

    /// Remove a checked set of five distinct positions and refill.
    fn claim_set(&mut self, positions: &[usize]) -> Result<(), GameError> {
        let hand = self.hand.slots();
        let cards: Vec<Card> = positions.iter().map(|&i| hand[i].card).collect();
        if !is_valid_set(&cards) {
            return Err(GameError::NotASet);
        }

        let removed = self.hand.remove_positions(positions)?;
        self.deck.discard(removed);
        self.refill(positions.len());

        debug!(
            set = ?cards.iter().map(ToString::to_string).collect::<Vec<_>>(),
            hand = self.hand.len(),
            remaining = self.deck.cards_remaining(),
            "set removed"
        );
        Ok(())
    }

    /// Append up to `count` cards from the draw pile to the hand.
    fn refill(&mut self, count: usize) {
        self.hand.extend(self.deck.draw(count));
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn check_group_size(actual: usize) -> Result<(), GameError> {
    if actual == SET_SIZE {
        Ok(())
    } else {
        Err(GameError::WrongGroupSize {
            expected: SET_SIZE,
            actual,
        })
    }
}
