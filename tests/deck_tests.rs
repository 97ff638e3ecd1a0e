//! Deck properties: shuffling permutes, drawing and discarding conserve cards.

use proptest::prelude::*;

use pentaset::{Deck, GameRng, DECK_SIZE};

proptest! {
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(seed));

        let mut cards = deck.cards();
        cards.sort();
        prop_assert_eq!(cards, Deck::generate());
    }

    #[test]
    fn prop_draw_discard_conserves(
        seed in any::<u64>(),
        draws in proptest::collection::vec(0usize..40, 0..8),
    ) {
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(seed));

        let mut drawn_total = 0;
        for count in draws {
            let before = deck.cards_remaining();
            let next = deck.cards();
            let drawn = deck.draw(count);

            prop_assert_eq!(drawn.len(), count.min(before));
            prop_assert_eq!(&drawn[..], &next[..drawn.len()]);
            drawn_total += drawn.len();

            deck.discard(drawn);
            prop_assert_eq!(deck.total_cards_available(), DECK_SIZE);
        }

        prop_assert_eq!(deck.discard_pile().len(), drawn_total);
        prop_assert_eq!(deck.cards_remaining(), DECK_SIZE - drawn_total);
    }
}

#[test]
fn test_shuffle_spreads_cards() {
    // Across many seeds the top card should not stick to a few values.
    let mut tops = rustc_hash::FxHashSet::default();
    for seed in 0..500 {
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(seed));
        tops.insert(deck.cards()[0]);
    }

    assert!(tops.len() > 100, "only {} distinct top cards", tops.len());
}

#[test]
fn test_shuffle_leaves_discard_alone() {
    let mut deck = Deck::new();
    let drawn = deck.draw(10);
    deck.discard(drawn.clone());

    deck.shuffle(&mut GameRng::new(3));

    assert_eq!(deck.discard_pile(), drawn);
    assert_eq!(deck.cards_remaining(), DECK_SIZE - 10);
}
