//! Game session: the selection state machine.
//!
//! ## Lifecycle
//!
//! A session is dealt from a `PairSet`, takes clicks through `select_card`,
//! and is replaced wholesale by `reset`. Nothing is ever partially reset.
//!
//! ## Transitions
//!
//! - Click while locked, on a matched card, or on a selected card: ignored
//! - Click in the same column as the single pick: the pick is switched
//! - Click that fills the selection: evaluated on the spot
//!   - pair: both cards matched, score up, selection cleared, no delay
//!   - no pair: miss counted, selection kept, lock held until the
//!     mismatch token fires
//!
//! ```
//! use pair_match::cards::{CardId, PairSet};
//! use pair_match::core::GameRng;
//! use pair_match::session::{GameSession, SelectOutcome};
//! use std::time::Duration;
//!
//! let mut rng = GameRng::new(42);
//! let mut session = GameSession::new(PairSet::philosophy(), Duration::from_millis(1000), &mut rng);
//!
//! let left = session.left_column()[0].clone();
//! let partner = session.right_column().iter().find(|c| c.key == left.key).unwrap().id.clone();
//!
//! assert_eq!(session.select_card(&left.id), SelectOutcome::Selected);
//! assert!(matches!(session.select_card(&partner), SelectOutcome::Matched { .. }));
//! assert_eq!(session.score(), 1);
//! ```

use std::time::Duration;

use im::Vector;
use tracing::{debug, trace, warn};

use super::outcome::{IgnoreReason, SelectOutcome};
use super::selection::Selection;
use super::timer::{PendingClear, TimerToken};
use crate::cards::{deal, Card, CardId, MatchedPair, PairSet};
use crate::core::rng::GameRng;

/// One game, from deal to completion.
///
/// Owns both columns, the selection, the matched records and the counters.
/// Columns and records use `im::Vector` so snapshots clone in O(1).
#[derive(Clone, Debug)]
pub struct GameSession {
    pairs: PairSet,
    mismatch_delay: Duration,
    generation: u64,

    left: Vector<Card>,
    right: Vector<Card>,
    selection: Selection,
    matched: Vector<MatchedPair>,
    incorrect_attempts: u32,

    /// Checking-lock: set while a full selection is being evaluated or shown.
    checking: bool,
    complete: bool,
    pending: Option<PendingClear>,
    next_timer: u64,
}

impl GameSession {
    /// Deal a new session (generation 0).
    #[must_use]
    pub fn new(pairs: PairSet, mismatch_delay: Duration, rng: &mut GameRng) -> Self {
        Self::dealt(pairs, mismatch_delay, rng, 0)
    }

    fn dealt(pairs: PairSet, mismatch_delay: Duration, rng: &mut GameRng, generation: u64) -> Self {
        let dealt = deal(&pairs, rng);
        Self {
            pairs,
            mismatch_delay,
            generation,
            left: dealt.left,
            right: dealt.right,
            selection: Selection::new(),
            matched: Vector::new(),
            incorrect_attempts: 0,
            checking: false,
            complete: false,
            pending: None,
            next_timer: 0,
        }
    }

    /// Replace this session with a freshly dealt one.
    ///
    /// The right column is reshuffled and every counter and flag cleared.
    /// Returns the token of a mismatch clear that was still pending, so the
    /// caller can cancel it with its scheduler.
    pub fn reset(&mut self, rng: &mut GameRng) -> Option<TimerToken> {
        let cancelled = self.pending.map(|p| p.token);
        *self = Self::dealt(self.pairs.clone(), self.mismatch_delay, rng, self.generation + 1);
        debug!(generation = self.generation, cancelled = ?cancelled, "session reset");
        cancelled
    }

    // === Clicks ===

    /// Handle a click on `id`.
    ///
    /// When the click fills the selection the pair is evaluated before this
    /// returns; a mismatch hands back the token the host must schedule.
    pub fn select_card(&mut self, id: &CardId) -> SelectOutcome {
        if self.checking {
            trace!(card = %id, "click ignored: checking");
            return SelectOutcome::Ignored(IgnoreReason::Locked);
        }

        let Some(card) = self.card(id).cloned() else {
            warn!(card = %id, "click on unknown card");
            return SelectOutcome::Ignored(IgnoreReason::UnknownCard);
        };

        if card.is_matched {
            trace!(card = %id, "click ignored: already matched");
            return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }

        if self.selection.contains(id) {
            trace!(card = %id, "click ignored: already selected");
            return SelectOutcome::Ignored(IgnoreReason::AlreadySelected);
        }

        if let Some(first) = self.selection.first() {
            if first.id.same_column(id) {
                trace!(from = %first.id, to = %id, "pick switched within column");
                self.selection.replace(card);
                return SelectOutcome::Switched;
            }
        }

        self.selection.push(card);

        let Some((a, b)) = self.selection.pair().map(|(a, b)| (a.clone(), b.clone())) else {
            return SelectOutcome::Selected;
        };
        self.evaluate(a, b)
    }

    fn evaluate(&mut self, a: Card, b: Card) -> SelectOutcome {
        self.checking = true;

        if a.pairs_with(&b) {
            self.mark_matched(&a.id);
            self.mark_matched(&b.id);

            let pair = MatchedPair::new(a.id, b.id);
            self.matched.push_back(pair.clone());
            self.selection.clear();
            self.checking = false;

            let completed = self.update_completion();
            debug!(
                first = %pair.0,
                second = %pair.1,
                score = self.score(),
                completed,
                "pair matched"
            );

            SelectOutcome::Matched { pair, completed }
        } else {
            self.incorrect_attempts += 1;

            let token = TimerToken::new(self.generation, self.next_timer);
            self.next_timer += 1;
            self.pending = Some(PendingClear {
                token,
                delay: self.mismatch_delay,
            });

            debug!(
                first = %a.id,
                second = %b.id,
                incorrect_attempts = self.incorrect_attempts,
                %token,
                "mismatch"
            );

            SelectOutcome::Mismatched {
                token,
                delay: self.mismatch_delay,
            }
        }
    }

    fn mark_matched(&mut self, id: &CardId) {
        for column in [&mut self.left, &mut self.right] {
            if let Some(index) = column.iter().position(|c| c.id == *id) {
                if let Some(card) = column.get_mut(index) {
                    card.is_matched = true;
                }
            }
        }
    }

    fn update_completion(&mut self) -> bool {
        if self.complete || self.matched.is_empty() || self.matched.len() != self.total_pairs() {
            return false;
        }
        self.complete = true;
        debug!(
            score = self.score(),
            incorrect_attempts = self.incorrect_attempts,
            "all pairs found"
        );
        true
    }

    // === Timer ===

    /// Fire the mismatch clear for `token`.
    ///
    /// Clears the selection and releases the lock. Returns false and changes
    /// nothing if `token` is not the pending clear of this session.
    pub fn expire_mismatch(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                self.selection.clear();
                self.checking = false;
                trace!(%token, "mismatch cleared");
                true
            }
            _ => {
                trace!(%token, generation = self.generation, "stale timer ignored");
                false
            }
        }
    }

    // === Queries ===

    /// Is `id` currently selected?
    #[must_use]
    pub fn is_selected(&self, id: &CardId) -> bool {
        self.selection.contains(id)
    }

    /// Selected ids, in click order.
    pub fn selection_ids(&self) -> impl Iterator<Item = &CardId> {
        self.selection.ids()
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Pairs found so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.matched.len()
    }

    /// Wrong pairs tried so far.
    #[must_use]
    pub fn incorrect_attempts(&self) -> u32 {
        self.incorrect_attempts
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Is the checking-lock held?
    #[must_use]
    pub fn is_checking(&self) -> bool {
        self.checking
    }

    /// The mismatch clear waiting to fire, if any.
    #[must_use]
    pub fn pending_clear(&self) -> Option<PendingClear> {
        self.pending
    }

    /// Confirmed pairs in the order they were found.
    #[must_use]
    pub fn matched_pairs(&self) -> &Vector<MatchedPair> {
        &self.matched
    }

    /// Left column, authoring order.
    #[must_use]
    pub fn left_column(&self) -> &Vector<Card> {
        &self.left
    }

    /// Right column, shuffled order.
    #[must_use]
    pub fn right_column(&self) -> &Vector<Card> {
        &self.right
    }

    /// Find a card in either column.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.left.iter().chain(self.right.iter()).find(|c| c.id == *id)
    }

    /// Number of pairs in the dataset.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// The dataset this session was dealt from.
    #[must_use]
    pub fn pairs(&self) -> &PairSet {
        &self.pairs
    }

    /// Reset counter; bumped by every `reset`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Configured mismatch display window.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Column, PairDefinition};

    const DELAY: Duration = Duration::from_millis(1000);

    fn session(seed: u64) -> (GameSession, GameRng) {
        let mut rng = GameRng::new(seed);
        let session = GameSession::new(PairSet::philosophy(), DELAY, &mut rng);
        (session, rng)
    }

    fn left(index: usize) -> CardId {
        CardId::new(Column::Left, index)
    }

    fn right_with_key(session: &GameSession, key: &str) -> CardId {
        session
            .right_column()
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.id.clone())
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let (session, _) = session(42);

        assert_eq!(session.left_column().len(), 5);
        assert_eq!(session.right_column().len(), 5);
        assert_eq!(session.score(), 0);
        assert_eq!(session.incorrect_attempts(), 0);
        assert!(session.selection().is_empty());
        assert!(session.matched_pairs().is_empty());
        assert!(!session.is_complete());
        assert!(!session.is_checking());
        assert!(session.pending_clear().is_none());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_first_pick() {
        let (mut session, _) = session(42);

        assert_eq!(session.select_card(&left(0)), SelectOutcome::Selected);
        assert!(session.is_selected(&left(0)));
        assert!(!session.is_checking());
    }

    #[test]
    fn test_reselect_same_card_is_noop() {
        let (mut session, _) = session(42);

        session.select_card(&left(0));
        assert_eq!(
            session.select_card(&left(0)),
            SelectOutcome::Ignored(IgnoreReason::AlreadySelected)
        );
        assert_eq!(session.selection().len(), 1);
        assert_eq!(session.incorrect_attempts(), 0);
    }

    #[test]
    fn test_same_column_switches_pick() {
        let (mut session, _) = session(42);

        session.select_card(&left(0));
        assert_eq!(session.select_card(&left(1)), SelectOutcome::Switched);

        let ids: Vec<_> = session.selection_ids().cloned().collect();
        assert_eq!(ids, vec![left(1)]);
        assert!(!session.is_checking());
    }

    #[test]
    fn test_match() {
        let (mut session, _) = session(42);
        let partner = right_with_key(&session, "A");

        session.select_card(&left(0));
        let outcome = session.select_card(&partner);

        assert_eq!(
            outcome,
            SelectOutcome::Matched {
                pair: MatchedPair::new(left(0), partner.clone()),
                completed: false,
            }
        );
        assert_eq!(session.score(), 1);
        assert!(session.card(&left(0)).unwrap().is_matched);
        assert!(session.card(&partner).unwrap().is_matched);
        assert!(session.selection().is_empty());
        assert!(!session.is_checking());
        assert!(session.pending_clear().is_none());
    }

    #[test]
    fn test_match_from_right_first() {
        let (mut session, _) = session(42);
        let partner = right_with_key(&session, "C");

        session.select_card(&partner);
        let outcome = session.select_card(&left(2));

        assert!(matches!(outcome, SelectOutcome::Matched { .. }));
        assert_eq!(session.matched_pairs()[0], MatchedPair::new(partner, left(2)));
    }

    #[test]
    fn test_mismatch_locks_until_token_fires() {
        let (mut session, _) = session(42);
        let wrong = right_with_key(&session, "C");

        session.select_card(&left(1));
        let outcome = session.select_card(&wrong);

        let (token, delay) = outcome.timer().unwrap();
        assert_eq!(delay, DELAY);
        assert_eq!(session.incorrect_attempts(), 1);
        assert_eq!(session.selection().len(), 2);
        assert!(session.is_checking());

        // Third click during the window
        assert_eq!(
            session.select_card(&left(3)),
            SelectOutcome::Ignored(IgnoreReason::Locked)
        );
        assert_eq!(session.selection().len(), 2);

        assert!(session.expire_mismatch(token));
        assert!(session.selection().is_empty());
        assert!(!session.is_checking());
        assert_eq!(session.incorrect_attempts(), 1);
    }

    #[test]
    fn test_stale_token_ignored() {
        let (mut session, _) = session(42);
        let wrong = right_with_key(&session, "C");

        session.select_card(&left(1));
        let (token, _) = session.select_card(&wrong).timer().unwrap();

        assert!(!session.expire_mismatch(TimerToken::new(99, token.sequence())));
        assert!(session.is_checking());

        assert!(session.expire_mismatch(token));
        assert!(!session.expire_mismatch(token));
    }

    #[test]
    fn test_matched_card_ignored() {
        let (mut session, _) = session(42);
        let partner = right_with_key(&session, "A");

        session.select_card(&left(0));
        session.select_card(&partner);

        assert_eq!(
            session.select_card(&left(0)),
            SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert_eq!(
            session.select_card(&partner),
            SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_unknown_card_ignored() {
        let (mut session, _) = session(42);

        assert_eq!(
            session.select_card(&CardId::from("middle-0")),
            SelectOutcome::Ignored(IgnoreReason::UnknownCard)
        );
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_completion() {
        let (mut session, _) = session(7);

        for (i, key) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            let partner = right_with_key(&session, key);
            session.select_card(&left(i));
            let outcome = session.select_card(&partner);

            let expect_done = i == 4;
            assert_eq!(
                outcome,
                SelectOutcome::Matched {
                    pair: MatchedPair::new(left(i), partner),
                    completed: expect_done,
                }
            );
            assert_eq!(session.is_complete(), expect_done);
        }

        assert_eq!(session.score(), 5);
        assert!(session.left_column().iter().all(|c| c.is_matched));
        assert!(session.right_column().iter().all(|c| c.is_matched));
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut session, mut rng) = session(42);
        let partner = right_with_key(&session, "A");
        let wrong = right_with_key(&session, "C");

        session.select_card(&left(0));
        session.select_card(&partner);
        session.select_card(&left(1));
        let (token, _) = session.select_card(&wrong).timer().unwrap();

        let cancelled = session.reset(&mut rng);
        assert_eq!(cancelled, Some(token));

        assert_eq!(session.generation(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.incorrect_attempts(), 0);
        assert!(session.selection().is_empty());
        assert!(!session.is_checking());
        assert!(!session.is_complete());
        assert!(session.pending_clear().is_none());
        assert!(session.left_column().iter().all(|c| !c.is_matched));

        // The old token no longer reaches the new session
        assert!(!session.expire_mismatch(token));
    }

    #[test]
    fn test_reset_without_pending() {
        let (mut session, mut rng) = session(42);
        assert_eq!(session.reset(&mut rng), None);
    }

    #[test]
    fn test_single_pair_game() {
        let pairs = PairSet::new(vec![PairDefinition::new("X", "left", "right")]).unwrap();
        let mut rng = GameRng::new(0);
        let mut session = GameSession::new(pairs, DELAY, &mut rng);

        session.select_card(&CardId::new(Column::Right, 0));
        let outcome = session.select_card(&left(0));

        assert!(matches!(outcome, SelectOutcome::Matched { completed: true, .. }));
        assert!(session.is_complete());
        assert_eq!(session.total_pairs(), 1);
    }
}
