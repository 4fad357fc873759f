//! Game controller: the boundary the presentation layer talks to.
//!
//! `MatchGame` owns the session, the RNG, the overlay and the last reported
//! layout, and borrows nothing from the view. The view sends events in and
//! reads a `Snapshot` back.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use pair_match::cards::CardId;
//! use pair_match::core::GameConfig;
//! use pair_match::game::MatchGame;
//!
//! let mut game = MatchGame::new(GameConfig::default().with_seed(42)).unwrap();
//!
//! // Pick a left card and a right card that does not belong to it
//! let left = game.session().left_column()[0].clone();
//! let wrong = game.session().right_column().iter().find(|c| c.key != left.key).unwrap().id.clone();
//!
//! game.on_card_click(&left.id);
//! game.on_card_click(&wrong);
//! assert_eq!(game.snapshot().incorrect_attempts, 1);
//! assert_eq!(game.snapshot().selection_ids.len(), 2);
//!
//! game.advance_time(Duration::from_millis(1000));
//! assert!(game.snapshot().selection_ids.is_empty());
//! ```

use std::time::Duration;

use tracing::{debug, trace};

use super::event::GameEvent;
use super::snapshot::Snapshot;
use super::summary::CompletionSummary;
use crate::cards::CardId;
use crate::core::{ConfigError, GameConfig, GameRng};
use crate::geometry::{Layout, LineSegment, Overlay};
use crate::session::{GameSession, ManualScheduler, Scheduler, SelectOutcome, TimerToken};

/// A running matching-pairs game.
pub struct MatchGame<S: Scheduler = ManualScheduler> {
    config: GameConfig,
    rng: GameRng,
    session: GameSession,
    scheduler: S,
    overlay: Overlay,
    layout: Layout,
    dialog_open: bool,
}

impl MatchGame<ManualScheduler> {
    /// Start a game on a virtual clock.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_scheduler(config, ManualScheduler::new())
    }

    /// Move the virtual clock forward, firing every mismatch clear now due.
    ///
    /// Returns how many fired tokens changed the session.
    pub fn advance_time(&mut self, by: Duration) -> usize {
        let due = self.scheduler.advance(by);
        due.into_iter().filter(|&token| self.on_timer_fired(token)).count()
    }
}

impl<S: Scheduler> MatchGame<S> {
    /// Start a game with a host-provided scheduler.
    pub fn with_scheduler(config: GameConfig, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let session = GameSession::new(config.pairs.clone(), config.mismatch_delay(), &mut rng);

        debug!(
            pairs = session.total_pairs(),
            seed = rng.seed(),
            delay_ms = config.mismatch_delay_ms,
            "game started"
        );

        Ok(Self {
            config,
            rng,
            session,
            scheduler,
            overlay: Overlay::new(),
            layout: Layout::default(),
            dialog_open: false,
        })
    }

    /// Dispatch an inbound event.
    ///
    /// Returns the click outcome for `CardClicked`, `None` for everything else.
    pub fn handle(&mut self, event: GameEvent) -> Option<SelectOutcome> {
        match event {
            GameEvent::CardClicked { card_id } => Some(self.on_card_click(&card_id)),
            GameEvent::ResetClicked => {
                self.on_reset_click();
                None
            }
            GameEvent::ViewportChanged { layout } => {
                self.on_viewport_change(layout);
                None
            }
            GameEvent::TimerFired { token } => {
                self.on_timer_fired(token);
                None
            }
            GameEvent::DialogClosed => {
                self.close_dialog();
                None
            }
        }
    }

    /// A card was clicked.
    pub fn on_card_click(&mut self, card_id: &CardId) -> SelectOutcome {
        let outcome = self.session.select_card(card_id);

        match &outcome {
            SelectOutcome::Matched { completed, .. } => {
                self.overlay.invalidate();
                self.refresh_lines();
                if *completed {
                    self.dialog_open = true;
                }
            }
            SelectOutcome::Mismatched { token, delay } => {
                self.scheduler.schedule(*token, *delay);
            }
            _ => {}
        }

        outcome
    }

    /// Start over: new deal, counters cleared, pending clear cancelled.
    pub fn on_reset_click(&mut self) {
        if let Some(token) = self.session.reset(&mut self.rng) {
            self.scheduler.cancel(token);
        }
        self.dialog_open = false;

        // Ids are positional, so the new deal occupies the reported slots
        self.overlay.invalidate();
        self.refresh_lines();
    }

    /// The layout moved; recompute lines against the new positions.
    pub fn on_viewport_change(&mut self, layout: Layout) {
        trace!(elements = layout.elements.len(), "viewport changed");
        self.layout = layout;
        self.overlay.invalidate();
        self.refresh_lines();
    }

    /// A scheduled mismatch clear fired.
    ///
    /// Returns false for tokens from a superseded session or clear.
    pub fn on_timer_fired(&mut self, token: TimerToken) -> bool {
        self.session.expire_mismatch(token)
    }

    /// Dismiss the completion dialog. Game state is untouched.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    fn refresh_lines(&mut self) {
        self.overlay
            .refresh(self.session.matched_pairs(), &self.layout, self.layout.frame);
    }

    // === Queries ===

    /// Everything the view needs to render.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session, self.overlay.segments(), self.dialog_open)
    }

    /// Current connector lines.
    #[must_use]
    pub fn line_segments(&self) -> &[LineSegment] {
        self.overlay.segments()
    }

    /// Is the completion dialog showing?
    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Dialog content, while the dialog is open.
    #[must_use]
    pub fn dialog(&self) -> Option<CompletionSummary> {
        (self.dialog_open && self.session.is_complete())
            .then(|| CompletionSummary::of(&self.session))
    }

    /// The current session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Seed of the column shuffle, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
