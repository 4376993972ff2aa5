//! Game configuration.
//!
//! `GameConfig` fixes everything about a session that is decided before the
//! deal: the seed, rule options and input-boundary timings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What may be placed on an empty tableau when the card comes from a
/// foundation.
///
/// Waste and tableau sources always need a King for an empty tableau.
/// Foundation sources are the one path where the classic game has been
/// played both ways, so the choice is explicit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyTableauRule {
    /// Any foundation top card may go to an empty tableau.
    #[default]
    AnyRank,
    /// Only a King may go to an empty tableau, as on every other path.
    KingOnly,
}

/// Rule options consulted by the move engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOptions {
    pub foundation_to_empty_tableau: EmptyTableauRule,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Deal seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Rule options for the move engine.
    #[serde(default)]
    pub rules: RuleOptions,

    /// How long a chord key waits for its second press, in milliseconds.
    pub chord_timeout_ms: u64,

    /// How long the invalid-move indicator stays on, in milliseconds.
    pub invalid_move_flash_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rules: RuleOptions::default(),
            chord_timeout_ms: 500,
            invalid_move_flash_ms: 2000,
        }
    }
}

impl GameConfig {
    /// Use a fixed deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose the foundation-to-empty-tableau rule.
    #[must_use]
    pub fn with_empty_tableau_rule(mut self, rule: EmptyTableauRule) -> Self {
        self.rules.foundation_to_empty_tableau = rule;
        self
    }

    #[must_use]
    pub fn with_chord_timeout(mut self, timeout: Duration) -> Self {
        self.chord_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn chord_timeout(&self) -> Duration {
        Duration::from_millis(self.chord_timeout_ms)
    }

    #[must_use]
    pub fn invalid_move_flash(&self) -> Duration {
        Duration::from_millis(self.invalid_move_flash_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.rules.foundation_to_empty_tableau, EmptyTableauRule::AnyRank);
        assert_eq!(config.chord_timeout(), Duration::from_millis(500));
        assert_eq!(config.invalid_move_flash(), Duration::from_secs(2));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_empty_tableau_rule(EmptyTableauRule::KingOnly)
            .with_chord_timeout(Duration::from_millis(300));

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.rules.foundation_to_empty_tableau, EmptyTableauRule::KingOnly);
        assert_eq!(config.chord_timeout_ms, 300);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_rules_default_when_missing() {
        let json = r#"{"seed":null,"chord_timeout_ms":250,"invalid_move_flash_ms":1000}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rules, RuleOptions::default());
        assert_eq!(config.chord_timeout_ms, 250);
    }
}
