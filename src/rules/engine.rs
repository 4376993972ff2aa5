//! Move engine: applies validated moves and stock operations.
//!
//! Every operation either succeeds completely or leaves the state exactly
//! as it was. Validation lives in `validate`; this module only mutates.

use tracing::{debug, info, trace};

use super::validate::check_move;
use crate::core::error::MoveError;
use crate::core::state::GameState;
use crate::piles::PileId;

/// A request to move the cards from `card_index` to the top of `source`
/// onto `destination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub source: PileId,
    pub card_index: usize,
    pub destination: PileId,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(source: PileId, card_index: usize, destination: PileId) -> Self {
        Self {
            source,
            card_index,
            destination,
        }
    }

    /// Build a request from raw pile ids.
    pub fn from_raw(source: u8, card_index: usize, destination: u8) -> Result<Self, MoveError> {
        Ok(Self::new(
            PileId::try_from(source)?,
            card_index,
            PileId::try_from(destination)?,
        ))
    }
}

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Number of cards relocated.
    pub cards_moved: usize,
    /// True if a face-down tableau card was turned up underneath.
    pub revealed: bool,
}

/// What a stock operation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockAction {
    /// One card went from stock to waste.
    Drawn,
    /// The waste was turned back into the stock.
    Recycled(usize),
    /// Nothing to do.
    NoOp,
}

impl GameState {
    /// Validate and perform a move.
    pub fn try_move(&mut self, request: MoveRequest) -> Result<MoveOutcome, MoveError> {
        let cards_moved = match check_move(self, request) {
            Ok(count) => count,
            Err(err) => {
                trace!(
                    source = %request.source,
                    index = request.card_index,
                    destination = %request.destination,
                    %err,
                    "move rejected"
                );
                return Err(err);
            }
        };

        let group = self.pile_mut(request.source).split_off(request.card_index);
        self.pile_mut(request.destination).extend(group);

        let revealed = request.source.is_tableau() && self.reveal_top(request.source);

        debug!(
            source = %request.source,
            destination = %request.destination,
            cards_moved,
            revealed,
            "move applied"
        );

        if self.compute_win() {
            info!("game won");
        }

        Ok(MoveOutcome {
            cards_moved,
            revealed,
        })
    }

    /// Move cards between piles; `false` means nothing changed.
    pub fn move_cards(&mut self, source: PileId, card_index: usize, destination: PileId) -> bool {
        self.try_move(MoveRequest::new(source, card_index, destination))
            .is_ok()
    }

    fn reveal_top(&mut self, pile: PileId) -> bool {
        match self.pile_mut(pile).top_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Turn the top stock card face up onto the waste.
    ///
    /// Does nothing when the stock is empty.
    pub fn draw(&mut self) -> StockAction {
        let Ok(card) = self.pile_mut(PileId::STOCK).pop() else {
            return StockAction::NoOp;
        };
        self.pile_mut(PileId::WASTE).push(card.with_face_up(true));
        debug!(%card, "drew from stock");
        StockAction::Drawn
    }

    /// Turn the waste back over into the stock.
    ///
    /// Only allowed once the stock is exhausted. The waste's top card ends
    /// up at the bottom of the stock, so cards come back out in the order
    /// they were first drawn.
    pub fn recycle_waste(&mut self) -> StockAction {
        if !self.stock().is_empty() || self.waste().is_empty() {
            return StockAction::NoOp;
        }
        let cards = self.pile_mut(PileId::WASTE).take_all();
        let count = cards.len();
        self.pile_mut(PileId::STOCK)
            .extend(cards.into_iter().rev().map(|card| card.with_face_up(false)));
        debug!(count, "recycled waste into stock");
        StockAction::Recycled(count)
    }

    /// Draw if the stock has cards, otherwise recycle the waste.
    pub fn draw_or_recycle(&mut self) -> StockAction {
        if self.stock().is_empty() {
            self.recycle_waste()
        } else {
            self.draw()
        }
    }

    /// Recompute and cache the win flag.
    pub fn compute_win(&mut self) -> bool {
        self.won = self.is_won();
        self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_from_raw() {
        assert_eq!(
            MoveRequest::from_raw(1, 0, 6),
            Ok(MoveRequest::new(PileId::WASTE, 0, PileId::tableau(0)))
        );
        assert_eq!(MoveRequest::from_raw(1, 0, 13), Err(MoveError::UnknownPile(13)));
    }

    #[test]
    fn test_draw_moves_one_face_up_card() {
        let mut state = GameState::with_seed(5);
        let top = *state.stock().peek().unwrap();

        assert_eq!(state.draw(), StockAction::Drawn);
        assert_eq!(state.stock().len(), 23);
        assert_eq!(state.waste().cards(), &[top.with_face_up(true)]);
    }

    #[test]
    fn test_recycle_noop_while_stock_has_cards() {
        let mut state = GameState::with_seed(5);
        state.draw();
        assert_eq!(state.recycle_waste(), StockAction::NoOp);
        assert_eq!(state.waste().len(), 1);
        assert_eq!(state.stock().len(), 23);
    }

    #[test]
    fn test_draw_or_recycle_cycles_the_stock() {
        let mut state = GameState::with_seed(5);
        let original: Vec<Card> = state.stock().cards().to_vec();

        for _ in 0..24 {
            assert_eq!(state.draw_or_recycle(), StockAction::Drawn);
        }
        assert_eq!(state.draw(), StockAction::NoOp);
        assert_eq!(state.draw_or_recycle(), StockAction::Recycled(24));
        assert!(state.waste().is_empty());

        // Recycling restores the original stock order
        assert_eq!(state.stock().cards(), original.as_slice());
    }

    #[test]
    fn test_reveal_top() {
        let mut state = GameState::with_seed(5);
        let pile = PileId::tableau(1);
        state.pile_mut(pile).top_mut().unwrap().face_up = false;
        assert!(state.reveal_top(pile));
        assert!(!state.reveal_top(pile));
        assert!(state.pile(pile).peek().unwrap().face_up);
    }

    #[test]
    fn test_stock_is_never_a_move_endpoint() {
        let mut state = GameState::with_seed(5);
        assert!(!state.move_cards(PileId::STOCK, 23, PileId::tableau(0)));
        assert!(!state.move_cards(PileId::tableau(0), 0, PileId::STOCK));
        assert_eq!(state.stock().len(), 24);
    }
}
