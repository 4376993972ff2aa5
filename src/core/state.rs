//! Game state: the 13 piles plus selection.
//!
//! ## GameState
//!
//! The single owned aggregate for a session:
//! - stock, waste, four foundations, seven tableaus
//! - the cursor (`selection`) and the staged move source
//! - the cached win flag
//! - rule options from `GameConfig`
//!
//! Piles are only reachable mutably from inside the crate. All play goes
//! through the move engine (`rules`) and the selection model (`selection`),
//! so the 52 cards are conserved across any sequence of operations.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::{GameConfig, RuleOptions};
use super::error::LayoutError;
use super::rng::GameRng;
use crate::cards::{shuffled_deck, Card, DECK_SIZE, RANKS_PER_SUIT};
use crate::piles::{Pile, PileId, PileRole, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::selection::Selection;

/// Explicit card placement for building a game without dealing.
///
/// Every vector runs bottom to top. Face orientation is taken as given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub tableaus: [Vec<Card>; TABLEAU_COUNT],
}

impl Layout {
    /// Iterate every card in the layout.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(&self.waste)
            .chain(self.foundations.iter().flatten())
            .chain(self.tableaus.iter().flatten())
    }
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    stock: Pile,
    waste: Pile,
    foundations: [Pile; FOUNDATION_COUNT],
    tableaus: [Pile; TABLEAU_COUNT],

    /// Cursor position.
    pub(crate) selection: Option<Selection>,

    /// Card picked up for a pending move.
    pub(crate) move_source: Option<Selection>,

    /// Cached result of the last win check.
    pub(crate) won: bool,

    rules: RuleOptions,
    seed: Option<u64>,
}

impl GameState {
    /// Shuffle a fresh deck and deal a new game.
    ///
    /// Tableau `i` receives `i + 1` cards with only the last one face up;
    /// the remaining 24 cards form the face-down stock.
    #[must_use]
    pub fn new_game(config: &GameConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();
        let deck = shuffled_deck(&mut rng);

        let mut state = Self::empty(config.rules);
        state.seed = Some(seed);
        state.deal(deck);

        info!(seed, "dealt new game");
        state
    }

    /// Deal a new game with default rules and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new_game(&GameConfig::default().with_seed(seed))
    }

    /// Build a game from an explicit layout.
    ///
    /// The layout must hold each of the 52 cards exactly once.
    pub fn from_layout(layout: Layout, rules: RuleOptions) -> Result<Self, LayoutError> {
        let mut state = Self::empty(rules);
        let Layout {
            stock,
            waste,
            foundations,
            tableaus,
        } = layout;

        state.stock = Pile::from(stock);
        state.waste = Pile::from(waste);
        state.foundations = foundations.map(Pile::from);
        state.tableaus = tableaus.map(Pile::from);

        state.verify_conservation()?;
        state.won = state.is_won();
        Ok(state)
    }

    fn empty(rules: RuleOptions) -> Self {
        Self {
            stock: Pile::new(),
            waste: Pile::new(),
            foundations: Default::default(),
            tableaus: Default::default(),
            selection: None,
            move_source: None,
            won: false,
            rules,
            seed: None,
        }
    }

    fn deal(&mut self, mut deck: Vec<Card>) {
        for (column, pile) in self.tableaus.iter_mut().enumerate() {
            let count = column + 1;
            let mut cards = deck.split_off(deck.len().saturating_sub(count));
            for card in &mut cards {
                card.face_up = false;
            }
            if let Some(last) = cards.last_mut() {
                last.face_up = true;
            }
            *pile = Pile::from(cards);
        }

        for card in &mut deck {
            card.face_up = false;
        }
        self.stock = Pile::from(deck);
    }

    // === Queries ===

    /// Look up a pile by id.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        match id.role() {
            PileRole::Stock => &self.stock,
            PileRole::Waste => &self.waste,
            PileRole::Foundation(i) => &self.foundations[i],
            PileRole::Tableau(i) => &self.tableaus[i],
        }
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id.role() {
            PileRole::Stock => &mut self.stock,
            PileRole::Waste => &mut self.waste,
            PileRole::Foundation(i) => &mut self.foundations[i],
            PileRole::Tableau(i) => &mut self.tableaus[i],
        }
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    #[must_use]
    pub fn tableaus(&self) -> &[Pile; TABLEAU_COUNT] {
        &self.tableaus
    }

    /// The `index`-th foundation, or `None` past the fourth.
    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.foundations.get(index)
    }

    /// The `index`-th tableau, or `None` past the seventh.
    #[must_use]
    pub fn tableau(&self, index: usize) -> Option<&Pile> {
        self.tableaus.get(index)
    }

    /// Current cursor position, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Card staged for a pending move, if any.
    #[must_use]
    pub fn move_source(&self) -> Option<Selection> {
        self.move_source
    }

    /// Win flag as of the last successful move.
    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// Rule options this game was created with.
    #[must_use]
    pub fn rules(&self) -> RuleOptions {
        self.rules
    }

    /// Deal seed, or `None` for games built from a layout.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        PileId::all().map(|id| self.pile(id).len()).sum()
    }

    /// Check that every one of the 52 cards is present exactly once.
    pub fn verify_conservation(&self) -> Result<(), LayoutError> {
        let mut seen = FxHashSet::default();
        for id in PileId::all() {
            for card in self.pile(id).cards() {
                if !seen.insert(card.key()) {
                    return Err(LayoutError::DuplicateCard(*card));
                }
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(LayoutError::WrongCardCount(seen.len()));
        }
        Ok(())
    }

    /// True if every foundation holds a full suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|pile| pile.len() == RANKS_PER_SUIT)
    }
}
