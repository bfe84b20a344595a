//! Board configuration.
//!
//! The standard Kalah game uses six pits per side and four seeds per pit.
//! `BoardConfig` carries both numbers so the layout helpers in
//! [`Board`](super::Board) never hardcode them.

use serde::{Deserialize, Serialize};

use crate::rules::ConfigError;

/// Pits per side in the standard game.
pub const STANDARD_PITS: usize = 6;

/// Seeds per pit in the standard game.
pub const STANDARD_SEEDS: u32 = 4;

/// Largest supported number of pits per side.
pub const MAX_PITS: usize = 32;

/// Largest supported number of starting seeds per pit. Together with
/// `MAX_PITS` this keeps every seed count well inside `u32`.
pub const MAX_SEEDS_PER_PIT: u32 = 1 << 16;

/// Board layout configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Pits owned by each player (not counting the store).
    pub pits_per_side: usize,

    /// Seeds placed in every pit at the start of a game.
    pub seeds_per_pit: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            pits_per_side: STANDARD_PITS,
            seeds_per_pit: STANDARD_SEEDS,
        }
    }
}

impl BoardConfig {
    /// The standard 6-pit, 4-seed configuration.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            pits_per_side: STANDARD_PITS,
            seeds_per_pit: STANDARD_SEEDS,
        }
    }

    /// Set the number of pits per side.
    #[must_use]
    pub fn with_pits_per_side(mut self, pits: usize) -> Self {
        self.pits_per_side = pits;
        self
    }

    /// Set the number of starting seeds per pit.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u32) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    /// Slots on one side: the pits plus the store.
    #[must_use]
    pub const fn side_len(&self) -> usize {
        self.pits_per_side + 1
    }

    /// Total slot count (both sides, both stores).
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        2 * self.side_len()
    }

    /// Seeds on the board for the whole game, or `None` if the layout is
    /// too large to count in a `u32`.
    #[must_use]
    pub fn total_seeds(&self) -> Option<u32> {
        u32::try_from(self.pits_per_side)
            .ok()?
            .checked_mul(2)?
            .checked_mul(self.seeds_per_pit)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pits_per_side == 0 || self.pits_per_side > MAX_PITS {
            return Err(ConfigError::Validation(format!(
                "pits_per_side must be in [1, {MAX_PITS}]"
            )));
        }
        if self.seeds_per_pit == 0 {
            return Err(ConfigError::Validation(
                "seeds_per_pit must be >= 1".into(),
            ));
        }
        if self.seeds_per_pit > MAX_SEEDS_PER_PIT {
            return Err(ConfigError::Validation(format!(
                "seeds_per_pit must be <= {MAX_SEEDS_PER_PIT}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let config = BoardConfig::standard();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.side_len(), 7);
        assert_eq!(config.slot_count(), 14);
        assert_eq!(config.total_seeds(), Some(48));
        config.validate().expect("standard config should be valid");
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::standard()
            .with_pits_per_side(4)
            .with_seeds_per_pit(3);

        assert_eq!(config.slot_count(), 10);
        assert_eq!(config.total_seeds(), Some(24));
    }

    #[test]
    fn test_validation_rejects_zero_pits() {
        let config = BoardConfig::standard().with_pits_per_side(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_too_many_pits() {
        let config = BoardConfig::standard().with_pits_per_side(MAX_PITS + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_seeds() {
        let err = BoardConfig::standard()
            .with_seeds_per_pit(0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: seeds_per_pit must be >= 1"
        );
    }

    #[test]
    fn test_validation_caps_seeds() {
        let at_cap = BoardConfig::standard()
            .with_pits_per_side(MAX_PITS)
            .with_seeds_per_pit(MAX_SEEDS_PER_PIT);
        at_cap.validate().expect("largest layout should be valid");
        assert_eq!(at_cap.total_seeds(), Some(2 * 32 * 65_536));

        let over = BoardConfig::standard().with_seeds_per_pit(MAX_SEEDS_PER_PIT + 1);
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_total_seeds_overflow_is_none() {
        let config = BoardConfig::standard().with_seeds_per_pit(u32::MAX);
        assert_eq!(config.total_seeds(), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"seeds_per_pit": 3}"#).unwrap();
        assert_eq!(config.pits_per_side, STANDARD_PITS);
        assert_eq!(config.seeds_per_pit, 3);
    }
}
