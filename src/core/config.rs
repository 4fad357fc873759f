//! Game configuration.
//!
//! A game is configured once, at construction:
//! - `pairs`: the fixed pair dataset
//! - `seed`: optional RNG seed for reproducible shuffles
//! - `mismatch_delay_ms`: how long a wrong pick stays visible
//!
//! `GameConfig` deserializes with serde so a host page can hand it over as
//! JSON. Missing optional fields fall back to the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::PairSet;

/// Default time a mismatched selection stays on screen.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

fn default_mismatch_delay_ms() -> u64 {
    DEFAULT_MISMATCH_DELAY_MS
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use pair_match::cards::{PairDefinition, PairSet};
/// use pair_match::core::GameConfig;
///
/// let pairs = PairSet::new(vec![
///     PairDefinition::new("H", "Hydrogen", "H"),
///     PairDefinition::new("O", "Oxygen", "O"),
/// ])
/// .unwrap();
///
/// let config = GameConfig::new(pairs)
///     .with_seed(42)
///     .with_mismatch_delay(Duration::from_millis(500));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.mismatch_delay(), Duration::from_millis(500));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The pair dataset. Fixed for the lifetime of the game.
    pub pairs: PairSet,

    /// Seed for the column shuffle. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Mismatch display window in milliseconds.
    #[serde(default = "default_mismatch_delay_ms")]
    pub mismatch_delay_ms: u64,
}

impl GameConfig {
    /// Create a configuration for a pair set with default timing.
    #[must_use]
    pub fn new(pairs: PairSet) -> Self {
        Self {
            pairs,
            seed: None,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
        }
    }

    /// Replace the pair dataset.
    #[must_use]
    pub fn with_pairs(mut self, pairs: PairSet) -> Self {
        self.pairs = pairs;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the mismatch display window.
    ///
    /// Sub-millisecond precision is dropped.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The mismatch display window.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Check the configuration.
    ///
    /// The pair set validates itself on construction and deserialization,
    /// so this only rejects settings a `PairSet` cannot see.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pairs.is_empty() {
            return Err(ConfigError::EmptyPairSet);
        }
        if self.mismatch_delay_ms == 0 {
            return Err(ConfigError::ZeroMismatchDelay);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(PairSet::philosophy())
    }
}
