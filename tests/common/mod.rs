//! Shared helpers for building specific tables.

#![allow(dead_code)]

use rust_klondike::cards::standard_deck;
use rust_klondike::{Card, GameState, Layout, Rank, RuleOptions, Suit};
use rustc_hash::FxHashSet;

pub fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

pub fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Ace through King of one suit, face up.
pub fn full_suit(suit: Suit) -> Vec<Card> {
    Rank::ALL.iter().map(|&rank| up(suit, rank)).collect()
}

/// Build a game from a partial layout; unplaced cards go to the stock face down.
pub fn game_with(rules: RuleOptions, place: impl FnOnce(&mut Layout)) -> GameState {
    let mut layout = Layout::default();
    place(&mut layout);

    let used: FxHashSet<_> = layout.cards().map(|card| card.key()).collect();
    layout
        .stock
        .extend(standard_deck().into_iter().filter(|card| !used.contains(&card.key())));

    GameState::from_layout(layout, rules).expect("layout should hold 52 distinct cards")
}

pub fn game(place: impl FnOnce(&mut Layout)) -> GameState {
    game_with(RuleOptions::default(), place)
}
