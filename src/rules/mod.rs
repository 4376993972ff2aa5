//! Move engine for Klondike.
//!
//! - `validate`: the role-pair rule table (pure checks, no mutation)
//! - `engine`: `try_move`, `draw`, `recycle_waste`, win detection
//!
//! The engine is synchronous and never panics; every failure is returned
//! as a `MoveError` and leaves the game unchanged.

pub mod engine;
pub mod validate;

pub use engine::{MoveOutcome, MoveRequest, StockAction};
pub use validate::{check_move, foundation_accepts, tableau_accepts};
