//! Error types.
//!
//! Every engine failure is recoverable and leaves the game untouched.
//! `MoveError` splits into two classes: bad references (unknown pile, index
//! out of range, nothing to act on) and `IllegalMove`, a well-formed request
//! that breaks a rule. Stock no-ops are not errors; see `StockAction`.

use thiserror::Error;

use crate::cards::Card;
use crate::piles::PileId;

/// Failure of a bare pile operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PileError {
    #[error("pile is empty")]
    EmptyPile,
}

/// The rule a rejected move broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("the moving group contains a face-down card")]
    FaceDownCard,
    #[error("the stock is only changed by drawing or recycling")]
    StockNotPlayable,
    #[error("cards cannot be placed on the waste")]
    WasteNotTarget,
    #[error("cards cannot move between foundations")]
    FoundationToFoundation,
    #[error("source and destination are the same pile")]
    SamePile,
    #[error("only a single card may move here")]
    SingleCardOnly,
    #[error("only a King may move to an empty tableau")]
    NeedsKing,
    #[error("an empty foundation only accepts an Ace")]
    NeedsAce,
    #[error("{moving} cannot go on {target}: colors must alternate")]
    ColorClash { moving: Card, target: Card },
    #[error("{moving} cannot go on {target}: ranks must be adjacent")]
    RankGap { moving: Card, target: Card },
    #[error("{moving} does not match the suit of {target}")]
    SuitMismatch { moving: Card, target: Card },
    #[error("that card cannot be picked up")]
    NotStageable,
}

/// Failure of a move, draw target or selection request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no pile with id {0}")]
    UnknownPile(u8),
    #[error("{pile} has {len} cards, no card at index {index}")]
    CardIndexOutOfRange { pile: PileId, index: usize, len: usize },
    #[error("{0} is empty")]
    EmptyPile(PileId),
    #[error("nothing is selected")]
    NothingSelected,
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
}

impl MoveError {
    /// True for the reference class (bad pile id, bad index, nothing there).
    #[must_use]
    pub fn is_invalid_reference(&self) -> bool {
        !matches!(self, MoveError::Illegal(_))
    }
}

/// A layout that does not hold exactly the 52 distinct cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("expected 52 cards, found {0}")]
    WrongCardCount(usize),
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
}
