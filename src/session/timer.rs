//! Deferred mismatch clear.
//!
//! A mismatch leaves both picks visible for a fixed window. The session does
//! not sleep; it hands out a `TimerToken` and the host schedules it through a
//! `Scheduler`. When the token fires the session clears the selection.
//!
//! ## Staleness
//!
//! Tokens carry the session generation. A reset bumps the generation and
//! cancels the outstanding token, and a token that fires late anyway no
//! longer matches the pending clear, so it is ignored.
//!
//! ## ManualScheduler
//!
//! A virtual clock for tests and for hosts that pump time themselves:
//!
//! ```
//! use std::time::Duration;
//! use pair_match::session::{ManualScheduler, Scheduler, TimerToken};
//!
//! let mut scheduler = ManualScheduler::new();
//! let token = TimerToken::new(0, 0);
//! scheduler.schedule(token, Duration::from_millis(1000));
//!
//! assert!(scheduler.advance(Duration::from_millis(999)).is_empty());
//! assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![token]);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle for one scheduled mismatch clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    generation: u64,
    sequence: u64,
}

impl TimerToken {
    /// Create a token.
    #[must_use]
    pub const fn new(generation: u64, sequence: u64) -> Self {
        Self {
            generation,
            sequence,
        }
    }

    /// Session generation that issued this token.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    /// Issue order within the session.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.sequence
    }
}

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({}:{})", self.generation, self.sequence)
    }
}

/// The one clear a session may have outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingClear {
    /// Token the host will fire.
    pub token: TimerToken,
    /// Delay measured from evaluation.
    pub delay: Duration,
}

/// Host-side deferred callbacks.
///
/// Implementations call back into the game with the token once `delay` has
/// elapsed, unless it was cancelled first. A browser host would wrap
/// `setTimeout`/`clearTimeout`.
pub trait Scheduler {
    /// Arrange for `token` to fire after `delay`.
    fn schedule(&mut self, token: TimerToken, delay: Duration);

    /// Cancel `token` if it has not fired. Unknown tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}

/// Scheduler driven by explicit `advance` calls.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(Duration, TimerToken)>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of scheduled, unfired tokens.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Is `token` scheduled and unfired?
    #[must_use]
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|&(_, t)| t == token)
    }

    /// Move the clock forward and return every token now due, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now += by;

        let now = self.now;
        let mut due: Vec<_> = self.pending.iter().copied().filter(|&(at, _)| at <= now).collect();
        self.pending.retain(|&(at, _)| at > now);

        due.sort_by_key(|&(at, token)| (at, token.generation, token.sequence));
        due.into_iter().map(|(_, token)| token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.pending.push((self.now + delay, token));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|&(_, t)| t != token);
    }
}
