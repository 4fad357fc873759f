//! What a click did.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::timer::TimerToken;
use crate::cards::MatchedPair;

/// Why a click changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A pair is being evaluated or a mismatch is on display.
    Locked,
    /// The card's pair was already found.
    AlreadyMatched,
    /// The card is already part of the selection.
    AlreadySelected,
    /// No card with that id in either column.
    UnknownCard,
}

/// Result of `GameSession::select_card`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// No state change.
    Ignored(IgnoreReason),

    /// The card became the first pick.
    Selected,

    /// The card replaced a first pick from the same column.
    Switched,

    /// The two picks formed a pair. `completed` is true if it was the last one.
    Matched { pair: MatchedPair, completed: bool },

    /// The two picks did not pair. The selection stays until `token` fires.
    Mismatched { token: TimerToken, delay: Duration },
}

impl SelectOutcome {
    /// Did the click change session state?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// Timer the host must schedule, if any.
    #[must_use]
    pub fn timer(&self) -> Option<(TimerToken, Duration)> {
        match self {
            SelectOutcome::Mismatched { token, delay } => Some((*token, *delay)),
            _ => None,
        }
    }
}
