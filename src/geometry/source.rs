//! Element position lookup.
//!
//! The resolver never owns element positions. The presentation layer lends
//! it a `RectSource` at resolve time: a map it filled from the last layout
//! pass, or a closure that asks the live view.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::cards::CardId;

/// Bounding rectangle lookup by card id.
///
/// `None` means the element is not mounted yet.
pub trait RectSource {
    fn rect(&self, id: &CardId) -> Option<Rect>;
}

impl<F> RectSource for F
where
    F: Fn(&CardId) -> Option<Rect>,
{
    fn rect(&self, id: &CardId) -> Option<Rect> {
        self(id)
    }
}

/// Rectangles reported by the presentation layer, keyed by card id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectMap {
    rects: FxHashMap<CardId, Rect>,
}

impl RectMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or move) an element.
    pub fn insert(&mut self, id: CardId, rect: Rect) {
        self.rects.insert(id, rect);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl RectSource for RectMap {
    fn rect(&self, id: &CardId) -> Option<Rect> {
        self.rects.get(id).copied()
    }
}

impl FromIterator<(CardId, Rect)> for RectMap {
    fn from_iter<I: IntoIterator<Item = (CardId, Rect)>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

/// One layout pass as reported by the presentation layer: the reference
/// frame the overlay draws in, and every mounted card's rectangle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Bounding rectangle of the enclosing frame.
    pub frame: Rect,
    /// Card rectangles.
    pub elements: RectMap,
}

impl Layout {
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            elements: RectMap::new(),
        }
    }

    /// Add a card rectangle (builder pattern).
    #[must_use]
    pub fn with_element(mut self, id: CardId, rect: Rect) -> Self {
        self.elements.insert(id, rect);
        self
    }
}

impl RectSource for Layout {
    fn rect(&self, id: &CardId) -> Option<Rect> {
        self.elements.rect(id)
    }
}
