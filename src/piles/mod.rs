//! Piles and pile identification.
//!
//! ## Key Types
//!
//! - `Pile`: bare ordered card container (top = last)
//! - `PileId`: flat 0..=12 identifier shared by commands and queries
//! - `PileRole`: stock, waste, foundation(i) or tableau(i)

pub mod id;
pub mod pile;

pub use id::{PileId, PileRole, FOUNDATION_COUNT, PILE_COUNT, TABLEAU_COUNT};
pub use pile::{CardGroup, Pile};
