//! Card values: suit, rank, color and face orientation.
//!
//! Cards are plain `Copy` values. Identity is the `(suit, rank)` pair; the
//! `face_up` flag is state that travels with the card between piles.

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit (Ace through King).
pub const RANKS_PER_SUIT: usize = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Hearts and Diamonds are red; Spades and Clubs are black.
    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Spades | Suit::Clubs => CardColor::Black,
        }
    }

    /// Single-character glyph for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Suit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// Card rank. Discriminants are the numeric rank (Ace = 1 … King = 13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; RANKS_PER_SUIT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value, or `None` outside 1..=13.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// The rank directly above this one (`None` for King).
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// Short label: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// The `(suit, rank)` identity, ignoring orientation.
    #[must_use]
    pub const fn key(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    #[must_use]
    pub const fn color(self) -> CardColor {
        self.suit.color()
    }

    /// Copy of this card with the given orientation.
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }

    /// True if `self` can sit directly on `below` in a tableau run:
    /// opposite color and exactly one rank lower.
    #[must_use]
    pub fn stacks_on(self, below: Card) -> bool {
        self.color() != below.color() && self.rank.next() == Some(below.rank)
    }

    /// True if `self` can follow `below` on a foundation:
    /// same suit and exactly one rank higher.
    #[must_use]
    pub fn follows_on_foundation(self, below: Card) -> bool {
        self.suit == below.suit && below.rank.next() == Some(self.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Hearts.color(), CardColor::Red);
        assert_eq!(Suit::Diamonds.color(), CardColor::Red);
        assert_eq!(Suit::Spades.color(), CardColor::Black);
        assert_eq!(Suit::Clubs.color(), CardColor::Black);
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(12), Some(Rank::Queen));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
        assert_eq!(Rank::Ace.next(), Some(Rank::Two));
        assert_eq!(Rank::King.next(), None);
        assert_eq!(Rank::Nine.next(), Some(Rank::Ten));
    }

    #[test]
    fn test_stacks_on() {
        let queen_hearts = Card::face_up(Suit::Hearts, Rank::Queen);
        let king_clubs = Card::face_up(Suit::Clubs, Rank::King);
        let king_diamonds = Card::face_up(Suit::Diamonds, Rank::King);
        let jack_hearts = Card::face_up(Suit::Hearts, Rank::Jack);

        assert!(queen_hearts.stacks_on(king_clubs));
        // Same color
        assert!(!queen_hearts.stacks_on(king_diamonds));
        // Rank gap
        assert!(!jack_hearts.stacks_on(king_clubs));
    }

    #[test]
    fn test_follows_on_foundation() {
        let ace = Card::face_up(Suit::Spades, Rank::Ace);
        let two = Card::face_up(Suit::Spades, Rank::Two);
        let two_clubs = Card::face_up(Suit::Clubs, Rank::Two);

        assert!(two.follows_on_foundation(ace));
        assert!(!two_clubs.follows_on_foundation(ace));
        assert!(!ace.follows_on_foundation(two));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
    }
}
