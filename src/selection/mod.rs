//! Selection and navigation model.
//!
//! Play is two-phase:
//! 1. The cursor (`selection`) is moved over the table and a card is
//!    picked up, staging it as the `move_source`.
//! 2. The cursor is moved to a destination and the staged move is attempted.
//!
//! A failed attempt keeps the move source so another destination can be
//! tried; `clear_selection` drops both.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::error::{IllegalMove, MoveError};
use crate::core::state::GameState;
use crate::piles::{PileId, PileRole};
use crate::rules::{MoveOutcome, MoveRequest};

/// A pile and a card position within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub pile: PileId,
    pub card_index: usize,
}

impl Selection {
    #[must_use]
    pub const fn new(pile: PileId, card_index: usize) -> Self {
        Self { pile, card_index }
    }
}

/// Cursor movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Previous pile in ring order.
    Left,
    /// Next pile in ring order.
    Right,
    /// Toward the bottom of a tableau (lower index).
    Up,
    /// Toward the top of a tableau (higher index).
    Down,
}

/// Result of a successful `select_or_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selected card was picked up.
    Staged(Selection),
    /// The staged card (and everything above it) was moved.
    Moved(MoveOutcome),
}

impl GameState {
    /// Place the cursor. The index is not checked.
    pub fn set_selection(&mut self, pile: PileId, card_index: usize) {
        self.selection = Some(Selection::new(pile, card_index));
    }

    /// Place the cursor on a pile at its natural index.
    pub fn select_pile(&mut self, pile: PileId) {
        let index = self.active_card_index(pile);
        self.set_selection(pile, index);
    }

    /// Drop both the cursor and any staged move source.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.move_source = None;
    }

    /// The index the cursor lands on when entering a pile.
    ///
    /// Stock, waste and foundations use their top card. Tableaus use the
    /// lowest face-up card so that the whole face-up run is picked up by
    /// default; a tableau with no face-up card (including an empty one)
    /// uses 0.
    #[must_use]
    pub fn active_card_index(&self, pile: PileId) -> usize {
        let cards = self.pile(pile);
        match pile.role() {
            PileRole::Tableau(_) => cards.first_face_up().unwrap_or(0),
            _ => cards.top_index().unwrap_or(0),
        }
    }

    /// Pick up the selected card, or move the already picked-up card onto
    /// the selected pile.
    pub fn select_or_move(&mut self) -> Result<SelectOutcome, MoveError> {
        let selection = self.selection.ok_or(MoveError::NothingSelected)?;

        let Some(source) = self.move_source else {
            if let Err(err) = self.check_stageable(selection) {
                trace!(pile = %selection.pile, index = selection.card_index, %err, "cannot stage");
                return Err(err);
            }
            debug!(pile = %selection.pile, index = selection.card_index, "staged move source");
            self.move_source = Some(selection);
            return Ok(SelectOutcome::Staged(selection));
        };

        let outcome = self.try_move(MoveRequest::new(source.pile, source.card_index, selection.pile))?;
        self.move_source = None;
        Ok(SelectOutcome::Moved(outcome))
    }

    /// Boolean form of `select_or_move`.
    pub fn select_or_move_ok(&mut self) -> bool {
        self.select_or_move().is_ok()
    }

    fn check_stageable(&self, selection: Selection) -> Result<(), MoveError> {
        let pile = self.pile(selection.pile);
        match selection.pile.role() {
            PileRole::Stock => Err(IllegalMove::NotStageable.into()),
            PileRole::Tableau(_) if pile.is_empty() => Err(MoveError::EmptyPile(selection.pile)),
            PileRole::Tableau(_) => match pile.get(selection.card_index) {
                Some(card) if card.face_up => Ok(()),
                Some(_) => Err(IllegalMove::NotStageable.into()),
                None => Err(MoveError::CardIndexOutOfRange {
                    pile: selection.pile,
                    index: selection.card_index,
                    len: pile.len(),
                }),
            },
            // Emptiness is reported by the move itself.
            PileRole::Waste | PileRole::Foundation(_) => Ok(()),
        }
    }

    /// Move the cursor.
    ///
    /// Left/right cycle through all 13 piles with wraparound. Up/down move
    /// within a tableau, clamped to its cards, and do nothing elsewhere.
    /// With nothing selected, any direction selects the stock at index 0.
    pub fn navigate(&mut self, direction: Direction) {
        let Some(current) = self.selection else {
            self.set_selection(PileId::STOCK, 0);
            return;
        };

        match direction {
            Direction::Left => self.select_pile(current.pile.cycle(-1)),
            Direction::Right => self.select_pile(current.pile.cycle(1)),
            Direction::Up | Direction::Down => {
                if !current.pile.is_tableau() {
                    return;
                }
                let Some(last) = self.pile(current.pile).top_index() else {
                    return;
                };
                let index = match direction {
                    Direction::Up => current.card_index.saturating_sub(1),
                    _ => current.card_index.saturating_add(1),
                };
                self.set_selection(current.pile, index.min(last));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_from_nothing_selects_stock() {
        let mut state = GameState::with_seed(1);
        state.navigate(Direction::Down);
        assert_eq!(state.selection(), Some(Selection::new(PileId::STOCK, 0)));

        // Same cursor as jumping to the stock
        state.clear_selection();
        state.navigate(Direction::Left);
        assert_eq!(state.selection(), Some(Selection::new(PileId::STOCK, 0)));
    }

    #[test]
    fn test_horizontal_wraps() {
        let mut state = GameState::with_seed(1);
        state.select_pile(PileId::STOCK);
        state.navigate(Direction::Left);
        assert_eq!(state.selection().map(|s| s.pile), Some(PileId::tableau(6)));
        // Lowest face-up card of the seven-card column
        assert_eq!(state.selection().map(|s| s.card_index), Some(6));

        state.navigate(Direction::Right);
        assert_eq!(state.selection().map(|s| s.pile), Some(PileId::STOCK));
    }

    #[test]
    fn test_vertical_clamps_within_tableau() {
        let mut state = GameState::with_seed(1);
        state.set_selection(PileId::tableau(3), 3);

        state.navigate(Direction::Down);
        assert_eq!(state.selection(), Some(Selection::new(PileId::tableau(3), 3)));

        for _ in 0..10 {
            state.navigate(Direction::Up);
        }
        assert_eq!(state.selection(), Some(Selection::new(PileId::tableau(3), 0)));
    }

    #[test]
    fn test_vertical_ignored_outside_tableau() {
        let mut state = GameState::with_seed(1);
        state.set_selection(PileId::WASTE, 0);
        state.navigate(Direction::Down);
        assert_eq!(state.selection(), Some(Selection::new(PileId::WASTE, 0)));
    }

    #[test]
    fn test_stock_is_not_stageable() {
        let mut state = GameState::with_seed(1);
        state.select_pile(PileId::STOCK);
        assert_eq!(
            state.select_or_move(),
            Err(MoveError::Illegal(IllegalMove::NotStageable))
        );
        assert_eq!(state.move_source(), None);
    }

    #[test]
    fn test_face_down_tableau_card_is_not_stageable() {
        let mut state = GameState::with_seed(1);
        state.set_selection(PileId::tableau(4), 0);
        assert!(!state.select_or_move_ok());
        assert_eq!(state.move_source(), None);

        state.set_selection(PileId::tableau(4), 4);
        assert!(state.select_or_move_ok());
        assert_eq!(state.move_source(), Some(Selection::new(PileId::tableau(4), 4)));
    }

    #[test]
    fn test_nothing_selected() {
        let mut state = GameState::with_seed(1);
        assert_eq!(state.select_or_move(), Err(MoveError::NothingSelected));
    }

    #[test]
    fn test_clear_selection_drops_move_source() {
        let mut state = GameState::with_seed(1);
        state.select_pile(PileId::tableau(0));
        state.select_or_move().unwrap();
        assert!(state.move_source().is_some());

        state.clear_selection();
        assert_eq!(state.selection(), None);
        assert_eq!(state.move_source(), None);
    }
}
