//! Deck construction and shuffling.

use super::card::{Card, Rank, Suit, DECK_SIZE};
use crate::core::rng::GameRng;

/// Build the 52 distinct cards, face down, grouped by suit in ascending rank.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Build a standard deck and shuffle it with `rng`.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_deck_is_complete() {
        let deck = standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let distinct: FxHashSet<_> = deck.iter().map(|c| c.key()).collect();
        assert_eq!(distinct.len(), DECK_SIZE);
        assert!(deck.iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let mut rng = GameRng::new(42);
        let shuffled = shuffled_deck(&mut rng);

        let mut a: Vec<_> = shuffled.iter().map(|c| c.key()).collect();
        let mut b: Vec<_> = standard_deck().iter().map(|c| c.key()).collect();
        assert_ne!(a, b);

        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = shuffled_deck(&mut GameRng::new(7));
        let b = shuffled_deck(&mut GameRng::new(7));
        assert_eq!(a, b);
    }
}
