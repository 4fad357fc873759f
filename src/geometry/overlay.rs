//! Cached connector overlay.
//!
//! Lines only change when the matched list changes or the layout moves.
//! `Overlay` keeps the last resolved set and recomputes it only after an
//! `invalidate`.

use tracing::trace;

use super::rect::Rect;
use super::resolver::{resolve_lines, LineSegment};
use super::source::RectSource;
use crate::cards::MatchedPair;

/// Derived line segments for the current matched pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlay {
    segments: Vec<LineSegment>,
    stale: bool,
}

impl Overlay {
    /// An empty, up-to-date overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the lines out of date.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Will the next `refresh` recompute?
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Recompute if stale, then return the lines.
    pub fn refresh<'a, I, S>(&mut self, pairs: I, source: &S, frame: Rect) -> &[LineSegment]
    where
        I: IntoIterator<Item = &'a MatchedPair>,
        S: RectSource + ?Sized,
    {
        if self.stale {
            self.segments = resolve_lines(pairs, source, frame);
            self.stale = false;
            trace!(lines = self.segments.len(), "overlay recomputed");
        }
        &self.segments
    }

    /// Last resolved lines, stale or not.
    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }
}
