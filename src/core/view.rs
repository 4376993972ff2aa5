//! Read-only snapshot for render layers.
//!
//! `TableView` is plain data: piles in `PileId` order with every card's
//! suit, rank and orientation, plus the cursor, the staged move source and
//! the win flag. Hiding face-down cards is up to the renderer.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::cards::Card;
use crate::piles::{PileId, PileRole};
use crate::selection::Selection;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub id: PileId,
    pub role: PileRole,
    /// Bottom to top.
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub piles: Vec<PileView>,
    pub selection: Option<Selection>,
    pub move_source: Option<Selection>,
    pub won: bool,
}

impl TableView {
    #[must_use]
    pub fn pile(&self, id: PileId) -> &PileView {
        &self.piles[id.index()]
    }
}

impl GameState {
    /// Snapshot the whole table.
    #[must_use]
    pub fn view(&self) -> TableView {
        let piles = PileId::all()
            .map(|id| PileView {
                id,
                role: id.role(),
                cards: self.pile(id).cards().to_vec(),
            })
            .collect();

        TableView {
            piles,
            selection: self.selection(),
            move_source: self.move_source(),
            won: self.won(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piles::PILE_COUNT;

    #[test]
    fn test_view_matches_state() {
        let mut state = GameState::with_seed(11);
        state.select_pile(PileId::tableau(2));

        let view = state.view();
        assert_eq!(view.piles.len(), PILE_COUNT);
        for id in PileId::all() {
            assert_eq!(view.pile(id).id, id);
            assert_eq!(view.pile(id).cards.as_slice(), state.pile(id).cards());
        }
        assert_eq!(view.selection, state.selection());
        assert_eq!(view.move_source, None);
        assert!(!view.won);
    }

    #[test]
    fn test_view_serialization() {
        let view = GameState::with_seed(11).view();
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: TableView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
