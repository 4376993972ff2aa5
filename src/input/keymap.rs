//! Key bindings.
//!
//! A key is bound either to a single command or to a chord: pressing it
//! twice within the chord window fires `repeat`, pressing it once fires
//! `fallback` (if any) when the window closes.

use rustc_hash::FxHashMap;

use crate::selection::Direction;

/// A key press as delivered by the terminal layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Enter,
    Esc,
    CtrlC,
}

/// A resolved command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Navigate(Direction),
    SelectOrMove,
    ClearSelection,
    DrawOrRecycle,
    JumpToStock,
    JumpToLastTableau,
    /// Handled by the presentation layer.
    ToggleHelp,
    /// Handled by the presentation layer.
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    Single(Command),
    Chord {
        repeat: Command,
        fallback: Option<Command>,
    },
}

#[derive(Clone, Debug, Default)]
pub struct Keymap {
    bindings: FxHashMap<Key, Binding>,
}

impl Keymap {
    /// A keymap with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Vim-style bindings.
    ///
    /// `h/j/k/l` and arrows navigate, Enter/Space pick up or drop, Esc
    /// cancels, `dd` (or a lone `d`) draws, `gg` jumps to the stock, `G`
    /// jumps to the last tableau, `?` toggles help, `q`/Ctrl-C quit.
    #[must_use]
    pub fn vim() -> Self {
        let mut map = Self::new();

        for (keys, direction) in [
            ([Key::Char('h'), Key::Left], Direction::Left),
            ([Key::Char('l'), Key::Right], Direction::Right),
            ([Key::Char('k'), Key::Up], Direction::Up),
            ([Key::Char('j'), Key::Down], Direction::Down),
        ] {
            for key in keys {
                map.bind(key, Binding::Single(Command::Navigate(direction)));
            }
        }

        map.bind(Key::Enter, Binding::Single(Command::SelectOrMove));
        map.bind(Key::Char(' '), Binding::Single(Command::SelectOrMove));
        map.bind(Key::Esc, Binding::Single(Command::ClearSelection));
        map.bind(Key::Char('G'), Binding::Single(Command::JumpToLastTableau));
        map.bind(Key::Char('?'), Binding::Single(Command::ToggleHelp));
        map.bind(Key::Char('q'), Binding::Single(Command::Quit));
        map.bind(Key::CtrlC, Binding::Single(Command::Quit));

        map.bind(
            Key::Char('d'),
            Binding::Chord {
                repeat: Command::DrawOrRecycle,
                fallback: Some(Command::DrawOrRecycle),
            },
        );
        map.bind(
            Key::Char('g'),
            Binding::Chord {
                repeat: Command::JumpToStock,
                fallback: None,
            },
        );

        map
    }

    /// Bind a key, replacing any existing binding.
    pub fn bind(&mut self, key: Key, binding: Binding) {
        self.bindings.insert(key, binding);
    }

    pub fn unbind(&mut self, key: Key) -> Option<Binding> {
        self.bindings.remove(&key)
    }

    #[must_use]
    pub fn lookup(&self, key: Key) -> Option<Binding> {
        self.bindings.get(&key).copied()
    }
}
