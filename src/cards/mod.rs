//! Card model and deck factory.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `CardColor`: card attributes and ordering
//! - `Card`: a value with suit, rank and face orientation
//! - `standard_deck` / `shuffled_deck`: the 52-card set

pub mod card;
pub mod deck;

pub use card::{Card, CardColor, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use deck::{shuffled_deck, standard_deck};
