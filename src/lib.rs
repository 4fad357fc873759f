//! # pair-match
//!
//! Core of a matching-pairs game: two columns of cards, one shuffled, that
//! the player connects into correct pairs.
//!
//! ## Design Principles
//!
//! 1. **Explicit state machine**: Every change is a discrete event
//!    (click, reset, layout change, timer fire) applied to one owned
//!    `GameSession`. Reset replaces the session wholesale.
//!
//! 2. **Timer as a side channel**: The mismatch delay is a cancellable
//!    token handed to a `Scheduler`, never a blocking wait.
//!
//! 3. **No rendering dependency**: Geometry reads element positions through
//!    an injected `RectSource`; the view only renders `Snapshot`s.
//!
//! ## Modules
//!
//! - `core`: Shuffle, RNG, configuration, errors
//! - `cards`: Pair definitions, card ids, cards, dealing
//! - `session`: Selection state machine and mismatch timer
//! - `geometry`: Connector line resolution and overlay cache
//! - `game`: Controller, events, snapshots, completion summary

pub mod cards;
pub mod core;
pub mod game;
pub mod geometry;
pub mod session;

// Re-export commonly used types
pub use crate::core::{shuffle, ConfigError, GameConfig, GameRng};

pub use crate::cards::{Card, CardId, Column, MatchedPair, PairDefinition, PairSet};

pub use crate::session::{
    GameSession, IgnoreReason, ManualScheduler, Scheduler, SelectOutcome, Selection, TimerToken,
};

pub use crate::geometry::{resolve_lines, Layout, LineSegment, Overlay, Point, Rect, RectMap, RectSource};

pub use crate::game::{CardView, CompletionSummary, GameEvent, MatchGame, Snapshot, SummaryOutcome};
