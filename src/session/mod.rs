//! Selection state machine and its deferred mismatch clear.
//!
//! ## Key Types
//!
//! - `GameSession`: Columns, selection, matched records, counters, lock
//! - `Selection`: Up to two picks in click order
//! - `SelectOutcome`: What a click did (including the timer to schedule)
//! - `TimerToken` / `Scheduler`: The single cancellable deferred clear
//! - `ManualScheduler`: Virtual-clock scheduler

pub mod outcome;
pub mod selection;
pub mod state;
pub mod timer;

pub use outcome::{IgnoreReason, SelectOutcome};
pub use selection::Selection;
pub use state::GameSession;
pub use timer::{ManualScheduler, PendingClear, Scheduler, TimerToken};
