//! Input boundary: key bindings, chord timing and command dispatch.
//!
//! The engine only ever sees resolved `Command`s. Chord timing and the
//! invalid-move indicator are driven by caller-supplied `Instant`s.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use rust_klondike::core::{GameConfig, GameState};
//! use rust_klondike::input::{InputController, Key};
//! use rust_klondike::piles::PileId;
//!
//! let config = GameConfig::default().with_seed(3);
//! let mut game = GameState::new_game(&config);
//! let mut input = InputController::new(&config);
//!
//! let t0 = Instant::now();
//! input.handle_key(&mut game, Key::Char('d'), t0);
//! input.handle_key(&mut game, Key::Char('d'), t0 + Duration::from_millis(50));
//!
//! assert_eq!(game.waste().len(), 1);
//! assert_eq!(game.selection().map(|s| s.pile), Some(PileId::WASTE));
//! ```

pub mod chord;
pub mod controller;
pub mod keymap;

pub use chord::{ChordResolver, Resolved};
pub use controller::{apply_command, CommandOutcome, InputController};
pub use keymap::{Binding, Command, Key, Keymap};
