//! Command dispatch and transient input feedback.

use std::time::{Duration, Instant};

use smallvec::SmallVec;

use super::chord::ChordResolver;
use super::keymap::{Command, Key, Keymap};
use crate::core::config::GameConfig;
use crate::core::error::MoveError;
use crate::core::state::GameState;
use crate::piles::{PileId, TABLEAU_COUNT};
use crate::rules::{MoveOutcome, StockAction};
use crate::selection::{SelectOutcome, Selection};

/// What a command did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The cursor moved.
    Navigated,
    /// Cursor and move source were cleared.
    Cleared,
    /// A card was picked up.
    Staged(Selection),
    /// A move was applied.
    Moved(MoveOutcome),
    /// The stock was drawn from or recycled (or neither).
    Stock(StockAction),
    /// The command was refused; the game is unchanged.
    Rejected(MoveError),
    /// Not a game command; left to the presentation layer.
    Passthrough(Command),
}

impl CommandOutcome {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, CommandOutcome::Rejected(_))
    }
}

/// Apply one command to the game.
///
/// After a stock operation the cursor follows the cards: onto the new waste
/// top after a draw, onto the stock otherwise.
pub fn apply_command(state: &mut GameState, command: Command) -> CommandOutcome {
    match command {
        Command::Navigate(direction) => {
            state.navigate(direction);
            CommandOutcome::Navigated
        }
        Command::SelectOrMove => match state.select_or_move() {
            Ok(SelectOutcome::Staged(selection)) => CommandOutcome::Staged(selection),
            Ok(SelectOutcome::Moved(outcome)) => CommandOutcome::Moved(outcome),
            Err(err) => CommandOutcome::Rejected(err),
        },
        Command::ClearSelection => {
            state.clear_selection();
            CommandOutcome::Cleared
        }
        Command::DrawOrRecycle => {
            let action = state.draw_or_recycle();
            match action {
                StockAction::Drawn => state.select_pile(PileId::WASTE),
                StockAction::Recycled(_) | StockAction::NoOp => state.set_selection(PileId::STOCK, 0),
            }
            CommandOutcome::Stock(action)
        }
        Command::JumpToStock => {
            state.set_selection(PileId::STOCK, 0);
            CommandOutcome::Navigated
        }
        Command::JumpToLastTableau => {
            state.select_pile(PileId::tableau(TABLEAU_COUNT - 1));
            CommandOutcome::Navigated
        }
        Command::ToggleHelp | Command::Quit => CommandOutcome::Passthrough(command),
    }
}

/// Turns key presses and timer ticks into game commands.
///
/// Owns the chord resolver and the invalid-move indicator deadline. One
/// controller serves one game at a time; it holds no game state itself.
#[derive(Clone, Debug)]
pub struct InputController {
    chords: ChordResolver,
    flash: Duration,
    invalid_until: Option<Instant>,
}

impl InputController {
    /// Controller with vim-style bindings and timings from `config`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_keymap(config, Keymap::vim())
    }

    #[must_use]
    pub fn with_keymap(config: &GameConfig, keymap: Keymap) -> Self {
        Self {
            chords: ChordResolver::new(keymap, config.chord_timeout()),
            flash: config.invalid_move_flash(),
            invalid_until: None,
        }
    }

    /// Handle a key press.
    pub fn handle_key(
        &mut self,
        state: &mut GameState,
        key: Key,
        now: Instant,
    ) -> SmallVec<[CommandOutcome; 2]> {
        self.chords
            .press(key, now)
            .into_iter()
            .map(|command| self.dispatch(state, command, now))
            .collect()
    }

    /// Advance timers; fires an expired chord's fallback.
    pub fn tick(&mut self, state: &mut GameState, now: Instant) -> Option<CommandOutcome> {
        if self.invalid_until.is_some_and(|until| now >= until) {
            self.invalid_until = None;
        }
        let command = self.chords.poll(now)?;
        Some(self.dispatch(state, command, now))
    }

    /// Apply a command and arm the invalid-move indicator on rejection.
    pub fn dispatch(&mut self, state: &mut GameState, command: Command, now: Instant) -> CommandOutcome {
        let outcome = apply_command(state, command);
        if outcome.is_rejected() {
            self.invalid_until = Some(now + self.flash);
        }
        outcome
    }

    /// The earliest instant at which `tick` has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.chords.deadline(), self.invalid_until) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// True while the invalid-move indicator should be shown.
    #[must_use]
    pub fn invalid_move_shown(&self, now: Instant) -> bool {
        self.invalid_until.is_some_and(|until| now < until)
    }

    #[must_use]
    pub fn chords(&self) -> &ChordResolver {
        &self.chords
    }
}
