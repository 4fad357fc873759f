//! Configuration errors.
//!
//! Gameplay never fails: ignored clicks and stale timers are reported as
//! outcomes, not errors. Only building a game from a bad configuration can.

use thiserror::Error;

/// Reasons a `GameConfig` or `PairSet` is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A game needs at least one pair to be completable.
    #[error("pair set is empty")]
    EmptyPairSet,

    /// Two definitions share a key, so a left card would have two partners.
    #[error("duplicate pair key: {key}")]
    DuplicateKey { key: String },

    /// A mismatch must stay visible for some time before it clears.
    #[error("mismatch delay must be greater than zero")]
    ZeroMismatchDelay,
}
