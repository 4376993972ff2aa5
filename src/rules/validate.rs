//! Move legality.
//!
//! Legality depends on the pair of pile roles, never on which physical
//! pile is used:
//!
//! | source \ dest | Foundation          | Tableau                         |
//! |---------------|---------------------|---------------------------------|
//! | Waste         | top card, ascending | top card, alternating / King    |
//! | Tableau       | one card, ascending | whole run, alternating / King   |
//! | Foundation    | never               | top card, alternating / rule opt|
//!
//! The stock is never a source or destination, and nothing is placed on the
//! waste.

use crate::cards::{Card, Rank};
use crate::core::config::EmptyTableauRule;
use crate::core::error::{IllegalMove, MoveError};
use crate::core::state::GameState;
use crate::piles::PileRole;

use super::engine::MoveRequest;

/// Check whether `moving` may be placed on a foundation whose top is `top`.
///
/// An empty foundation takes any Ace; after that the foundation is bound
/// to the Ace's suit because every later card is compared with the top.
pub fn foundation_accepts(moving: Card, top: Option<&Card>) -> Result<(), IllegalMove> {
    match top {
        None if moving.rank == Rank::Ace => Ok(()),
        None => Err(IllegalMove::NeedsAce),
        Some(&target) if moving.follows_on_foundation(target) => Ok(()),
        Some(&target) if moving.suit != target.suit => {
            Err(IllegalMove::SuitMismatch { moving, target })
        }
        Some(&target) => Err(IllegalMove::RankGap { moving, target }),
    }
}

/// Check whether a group whose bottom card is `moving` may be placed on a
/// tableau whose top is `top`.
pub fn tableau_accepts(
    moving: Card,
    top: Option<&Card>,
    empty_rule: EmptyTableauRule,
) -> Result<(), IllegalMove> {
    match top {
        None => match empty_rule {
            EmptyTableauRule::KingOnly if moving.rank != Rank::King => Err(IllegalMove::NeedsKing),
            _ => Ok(()),
        },
        Some(&target) if moving.stacks_on(target) => Ok(()),
        Some(&target) if moving.color() == target.color() => {
            Err(IllegalMove::ColorClash { moving, target })
        }
        Some(&target) => Err(IllegalMove::RankGap { moving, target }),
    }
}

fn single_card(group: &[Card]) -> Result<(), IllegalMove> {
    if group.len() == 1 {
        Ok(())
    } else {
        Err(IllegalMove::SingleCardOnly)
    }
}

/// Validate a move without touching the state.
///
/// Returns the number of cards that would move.
pub fn check_move(state: &GameState, request: MoveRequest) -> Result<usize, MoveError> {
    let MoveRequest {
        source,
        card_index,
        destination,
    } = request;

    match (source.role(), destination.role()) {
        (PileRole::Stock, _) | (_, PileRole::Stock) => {
            return Err(IllegalMove::StockNotPlayable.into())
        }
        (_, PileRole::Waste) => return Err(IllegalMove::WasteNotTarget.into()),
        (PileRole::Foundation(_), PileRole::Foundation(_)) => {
            return Err(IllegalMove::FoundationToFoundation.into())
        }
        _ if source == destination => return Err(IllegalMove::SamePile.into()),
        _ => {}
    }

    let pile = state.pile(source);
    if pile.is_empty() {
        return Err(MoveError::EmptyPile(source));
    }
    let group = match pile.cards().get(card_index..) {
        Some(group) if !group.is_empty() => group,
        _ => {
            return Err(MoveError::CardIndexOutOfRange {
                pile: source,
                index: card_index,
                len: pile.len(),
            })
        }
    };
    if group.iter().any(|card| !card.face_up) {
        return Err(IllegalMove::FaceDownCard.into());
    }

    let moving = group[0];
    let top = state.pile(destination).peek();

    match (source.role(), destination.role()) {
        (PileRole::Tableau(_), PileRole::Tableau(_)) => {
            tableau_accepts(moving, top, EmptyTableauRule::KingOnly)?;
        }
        (PileRole::Waste, PileRole::Tableau(_)) => {
            single_card(group)?;
            tableau_accepts(moving, top, EmptyTableauRule::KingOnly)?;
        }
        (PileRole::Foundation(_), PileRole::Tableau(_)) => {
            single_card(group)?;
            tableau_accepts(moving, top, state.rules().foundation_to_empty_tableau)?;
        }
        (PileRole::Waste | PileRole::Tableau(_), PileRole::Foundation(_)) => {
            single_card(group)?;
            foundation_accepts(moving, top)?;
        }
        // Stock, waste-destination and foundation pairs were rejected above.
        _ => return Err(IllegalMove::StockNotPlayable.into()),
    }

    Ok(group.len())
}
