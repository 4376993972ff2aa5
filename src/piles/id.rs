//! Pile identifiers and roles.
//!
//! Piles share one flat id space used by both commands and queries:
//!
//! | id    | pile            |
//! |-------|-----------------|
//! | 0     | stock           |
//! | 1     | waste           |
//! | 2..=5 | foundations 0-3 |
//! | 6..=12| tableaus 0-6    |
//!
//! Rules never compare raw ids; they match on `PileRole`.

use serde::{Deserialize, Serialize};

use crate::core::error::MoveError;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// Total number of piles on the table.
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT + TABLEAU_COUNT;

const FIRST_FOUNDATION: u8 = 2;
const FIRST_TABLEAU: u8 = FIRST_FOUNDATION + FOUNDATION_COUNT as u8;

/// Identifier of one of the 13 piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PileId(u8);

/// What a pile is for. Move legality depends only on the role pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRole {
    Stock,
    Waste,
    Foundation(usize),
    Tableau(usize),
}

impl PileId {
    pub const STOCK: PileId = PileId(0);
    pub const WASTE: PileId = PileId(1);

    /// Create a pile ID from its raw value, or `None` if out of range.
    #[must_use]
    pub const fn new(raw: u8) -> Option<Self> {
        if (raw as usize) < PILE_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Foundation pile `index` (0..4).
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub const fn foundation(index: usize) -> Self {
        assert!(index < FOUNDATION_COUNT, "foundation index out of range");
        Self(FIRST_FOUNDATION + index as u8)
    }

    /// Tableau pile `index` (0..7).
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub const fn tableau(index: usize) -> Self {
        assert!(index < TABLEAU_COUNT, "tableau index out of range");
        Self(FIRST_TABLEAU + index as u8)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Position in the 13-slot ring, usable as an array index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn role(self) -> PileRole {
        match self.0 {
            0 => PileRole::Stock,
            1 => PileRole::Waste,
            n if n < FIRST_TABLEAU => PileRole::Foundation((n - FIRST_FOUNDATION) as usize),
            n => PileRole::Tableau((n - FIRST_TABLEAU) as usize),
        }
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self.role(), PileRole::Tableau(_))
    }

    /// All piles in ring order: stock, waste, foundations, tableaus.
    pub fn all() -> impl Iterator<Item = PileId> {
        (0..PILE_COUNT as u8).map(PileId)
    }

    /// The pile `steps` slots away in ring order, wrapping in both directions.
    #[must_use]
    pub fn cycle(self, steps: i32) -> Self {
        let len = PILE_COUNT as i32;
        Self((self.0 as i32 + steps).rem_euclid(len) as u8)
    }
}

impl TryFrom<u8> for PileId {
    type Error = MoveError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        PileId::new(raw).ok_or(MoveError::UnknownPile(raw))
    }
}

impl TryFrom<PileRole> for PileId {
    type Error = MoveError;

    /// Fails with `UnknownPile` for a foundation or tableau index past the
    /// last pile of that kind.
    fn try_from(role: PileRole) -> Result<Self, Self::Error> {
        let raw = match role {
            PileRole::Stock => return Ok(PileId::STOCK),
            PileRole::Waste => return Ok(PileId::WASTE),
            PileRole::Foundation(i) if i < FOUNDATION_COUNT => return Ok(PileId::foundation(i)),
            PileRole::Tableau(i) if i < TABLEAU_COUNT => return Ok(PileId::tableau(i)),
            PileRole::Foundation(i) => offset_raw(FIRST_FOUNDATION, i),
            PileRole::Tableau(i) => offset_raw(FIRST_TABLEAU, i),
        };
        Err(MoveError::UnknownPile(raw))
    }
}

fn offset_raw(first: u8, index: usize) -> u8 {
    u8::try_from(index).map_or(u8::MAX, |i| first.saturating_add(i))
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.role() {
            PileRole::Stock => write!(f, "stock"),
            PileRole::Waste => write!(f, "waste"),
            PileRole::Foundation(i) => write!(f, "foundation {}", i + 1),
            PileRole::Tableau(i) => write!(f, "tableau {}", i + 1),
        }
    }
}
