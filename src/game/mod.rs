//! Controller and view contract.
//!
//! The presentation layer is an external collaborator: it renders a
//! `Snapshot` and forwards clicks, resets, layout changes, timer fires and
//! dialog dismissals as `GameEvent`s. `MatchGame` routes them to the
//! session, the scheduler and the overlay.

mod controller;
mod event;
mod snapshot;
mod summary;

pub use controller::MatchGame;
pub use event::GameEvent;
pub use snapshot::{CardView, Snapshot};
pub use summary::{CompletionSummary, SummaryOutcome};
