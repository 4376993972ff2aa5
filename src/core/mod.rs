//! Core engine types: state, configuration, errors, RNG and the query view.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod view;

pub use config::{EmptyTableauRule, GameConfig, RuleOptions};
pub use error::{IllegalMove, LayoutError, MoveError, PileError};
pub use rng::GameRng;
pub use state::{GameState, Layout};
pub use view::{PileView, TableView};
