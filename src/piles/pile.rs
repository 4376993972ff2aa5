//! Ordered card container used for every pile on the table.
//!
//! Index 0 is the bottom of the pile, the last index is the top. A `Pile`
//! does no rule checking; the move engine decides what may be added or
//! removed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::PileError;

/// Cards lifted off a pile in one move. A legal group never exceeds 13 cards.
pub type CardGroup = SmallVec<[Card; 13]>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::EmptyPile)
    }

    /// The top card, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the top card, or `None` if empty.
    #[must_use]
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// Index of the lowest face-up card, or `None` if no card is face up.
    #[must_use]
    pub fn first_face_up(&self) -> Option<usize> {
        self.cards.iter().position(|c| c.face_up)
    }

    /// Remove every card from `index` to the top, preserving order.
    ///
    /// Returns an empty group if `index` is past the top.
    pub fn split_off(&mut self, index: usize) -> CardGroup {
        if index >= self.cards.len() {
            return CardGroup::new();
        }
        self.cards.drain(index..).collect()
    }

    /// Append cards on top, preserving their order.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Mutable access to the top card, for orientation changes.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Remove and return every card, bottom to top.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
