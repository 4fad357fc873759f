//! Core building blocks: shuffling, RNG, configuration, errors.
//!
//! Nothing here knows about selection or geometry. The session and the
//! controller are built on top of these.

pub mod config;
pub mod error;
pub mod rng;
pub mod shuffle;

pub use config::{GameConfig, DEFAULT_MISMATCH_DELAY_MS};
pub use error::ConfigError;
pub use rng::GameRng;
pub use shuffle::shuffle;
