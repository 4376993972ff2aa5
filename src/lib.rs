//! # rust-klondike
//!
//! A Klondike Solitaire rules engine for terminal front-ends.
//!
//! ## Design Principles
//!
//! 1. **One owned aggregate**: `GameState` holds all 13 piles, the cursor
//!    and the staged move source. No global state.
//!
//! 2. **Role-pair rules**: move legality is a match on
//!    `(source role, destination role)`, never on raw pile numbers.
//!
//! 3. **All-or-nothing operations**: a failed move returns an error and
//!    leaves every pile untouched. The 52 cards are conserved.
//!
//! 4. **Timing stays at the edge**: chord keys and the invalid-move
//!    indicator are resolved in `input` from caller-supplied instants.
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, cards and the 52-card deck
//! - `piles`: the `Pile` container and the flat `PileId` space
//! - `core`: game state, configuration, errors, RNG and the query view
//! - `rules`: the move engine (validation, moves, draw, recycle, win)
//! - `selection`: cursor, two-phase pick-up/drop and navigation
//! - `input`: key bindings, chord resolution and command dispatch
//!
//! ## Example
//!
//! ```
//! use rust_klondike::{GameConfig, GameState, PileId};
//!
//! let mut game = GameState::new_game(&GameConfig::default().with_seed(42));
//! assert_eq!(game.stock().len(), 24);
//!
//! game.draw();
//! assert_eq!(game.waste().len(), 1);
//!
//! // The stock is never a move source.
//! assert!(!game.move_cards(PileId::STOCK, 0, PileId::tableau(0)));
//! ```

pub mod cards;
pub mod core;
pub mod input;
pub mod piles;
pub mod rules;
pub mod selection;

// Re-export commonly used types
pub use crate::cards::{Card, CardColor, Rank, Suit};

pub use crate::core::{
    EmptyTableauRule, GameConfig, GameRng, GameState, IllegalMove, Layout, LayoutError,
    MoveError, PileError, PileView, RuleOptions, TableView,
};

pub use crate::piles::{Pile, PileId, PileRole};

pub use crate::rules::{MoveOutcome, MoveRequest, StockAction};

pub use crate::selection::{Direction, SelectOutcome, Selection};

pub use crate::input::{apply_command, Command, CommandOutcome, InputController, Key, Keymap};
