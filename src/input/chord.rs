//! Chord disambiguation.
//!
//! `ChordResolver` is a two-state machine:
//!
//! - `Idle`: a chord key moves to `Pending` with a deadline; any other bound
//!   key resolves immediately.
//! - `Pending { key, deadline }`: the same key before the deadline fires the
//!   chord. A different key fires the pending key's fallback and is then
//!   resolved on its own. `poll` at or after the deadline fires the fallback.
//!
//! Time is always passed in, so callers drive the timer and the engine
//! never sees it. Each returned command is one resolved input.

use std::time::{Duration, Instant};

use smallvec::SmallVec;
use tracing::debug;

use super::keymap::{Binding, Command, Key, Keymap};

/// Commands produced by one key press: at most a fallback plus the key's own.
pub type Resolved = SmallVec<[Command; 2]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChordState {
    Idle,
    Pending {
        key: Key,
        repeat: Command,
        fallback: Option<Command>,
        deadline: Instant,
    },
}

#[derive(Clone, Debug)]
pub struct ChordResolver {
    keymap: Keymap,
    timeout: Duration,
    state: ChordState,
}

impl ChordResolver {
    #[must_use]
    pub fn new(keymap: Keymap, timeout: Duration) -> Self {
        Self {
            keymap,
            timeout,
            state: ChordState::Idle,
        }
    }

    #[must_use]
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ChordState::Pending { .. })
    }

    /// When the pending chord expires, for scheduling the caller's timer.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            ChordState::Pending { deadline, .. } => Some(deadline),
            ChordState::Idle => None,
        }
    }

    /// Resolve a key press at time `now`.
    pub fn press(&mut self, key: Key, now: Instant) -> Resolved {
        let mut out = Resolved::new();

        if let ChordState::Pending {
            key: pending,
            repeat,
            fallback,
            deadline,
        } = std::mem::replace(&mut self.state, ChordState::Idle)
        {
            if pending == key && now < deadline {
                debug!(?key, ?repeat, "chord completed");
                out.push(repeat);
                return out;
            }
            out.extend(fallback);
        }

        match self.keymap.lookup(key) {
            Some(Binding::Single(command)) => out.push(command),
            Some(Binding::Chord { repeat, fallback }) => {
                self.state = ChordState::Pending {
                    key,
                    repeat,
                    fallback,
                    deadline: now + self.timeout,
                };
            }
            None => {}
        }

        out
    }

    /// Fire the pending key's fallback if its window has closed.
    pub fn poll(&mut self, now: Instant) -> Option<Command> {
        match self.state {
            ChordState::Pending {
                key,
                fallback,
                deadline,
                ..
            } if now >= deadline => {
                self.state = ChordState::Idle;
                debug!(?key, ?fallback, "chord timed out");
                fallback
            }
            _ => None,
        }
    }

    /// Drop any pending chord without firing its fallback.
    pub fn cancel(&mut self) {
        self.state = ChordState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Direction;

    const TIMEOUT: Duration = Duration::from_millis(500);

    fn resolver() -> ChordResolver {
        ChordResolver::new(Keymap::vim(), TIMEOUT)
    }

    #[test]
    fn test_single_key_resolves_immediately() {
        let mut chords = resolver();
        let now = Instant::now();
        assert_eq!(
            chords.press(Key::Char('l'), now).as_slice(),
            &[Command::Navigate(Direction::Right)]
        );
        assert!(!chords.is_pending());
    }

    #[test]
    fn test_double_press_fires_chord() {
        let mut chords = resolver();
        let now = Instant::now();

        assert!(chords.press(Key::Char('g'), now).is_empty());
        assert!(chords.is_pending());
        assert_eq!(chords.deadline(), Some(now + TIMEOUT));

        let out = chords.press(Key::Char('g'), now + Duration::from_millis(100));
        assert_eq!(out.as_slice(), &[Command::JumpToStock]);
        assert!(!chords.is_pending());
        assert_eq!(chords.poll(now + TIMEOUT * 2), None);
    }

    #[test]
    fn test_timeout_fires_fallback() {
        let mut chords = resolver();
        let now = Instant::now();

        chords.press(Key::Char('d'), now);
        assert_eq!(chords.poll(now + Duration::from_millis(100)), None);
        assert_eq!(chords.poll(now + TIMEOUT), Some(Command::DrawOrRecycle));
        assert!(!chords.is_pending());
        assert_eq!(chords.poll(now + TIMEOUT), None);
    }

    #[test]
    fn test_timeout_without_fallback() {
        let mut chords = resolver();
        let now = Instant::now();

        chords.press(Key::Char('g'), now);
        assert_eq!(chords.poll(now + TIMEOUT), None);
        assert!(!chords.is_pending());
    }

    #[test]
    fn test_unrelated_key_fires_fallback_first() {
        let mut chords = resolver();
        let now = Instant::now();

        chords.press(Key::Char('d'), now);
        let out = chords.press(Key::Char('j'), now + Duration::from_millis(10));
        assert_eq!(
            out.as_slice(),
            &[Command::DrawOrRecycle, Command::Navigate(Direction::Down)]
        );
        assert!(!chords.is_pending());
    }

    #[test]
    fn test_other_chord_key_restarts_pending() {
        let mut chords = resolver();
        let now = Instant::now();

        chords.press(Key::Char('g'), now);
        let later = now + Duration::from_millis(10);
        assert!(chords.press(Key::Char('d'), later).is_empty());
        assert_eq!(chords.deadline(), Some(later + TIMEOUT));
    }

    #[test]
    fn test_late_second_press_is_not_a_chord() {
        let mut chords = resolver();
        let now = Instant::now();

        chords.press(Key::Char('d'), now);
        // Window already closed but nobody polled: fallback fires, and the
        // second press starts a new chord.
        let out = chords.press(Key::Char('d'), now + TIMEOUT);
        assert_eq!(out.as_slice(), &[Command::DrawOrRecycle]);
        assert!(chords.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut chords = resolver();
        let now = Instant::now();

        chords.press(Key::Char('d'), now);
        chords.cancel();
        assert_eq!(chords.poll(now + TIMEOUT), None);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut chords = resolver();
        assert!(chords.press(Key::Char('z'), Instant::now()).is_empty());
    }
}
