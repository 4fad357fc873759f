//! Connector line resolution.
//!
//! Each confirmed pair gets a straight line from the centre of one card to
//! the centre of the other, in the local coordinates of the overlay frame.

use serde::{Deserialize, Serialize};

use super::rect::{Point, Rect};
use super::source::RectSource;
use crate::cards::MatchedPair;

/// One connector line, frame-local.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Segment between two points.
    #[must_use]
    pub const fn between(from: Point, to: Point) -> Self {
        Self::new(from.x, from.y, to.x, to.y)
    }

    #[must_use]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[must_use]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

/// Resolve one line per matched pair.
///
/// Output order follows `pairs`. A pair with either rectangle missing from
/// `source` is left out.
///
/// ## Example
///
/// ```
/// use pair_match::cards::{CardId, Column, MatchedPair};
/// use pair_match::geometry::{resolve_lines, LineSegment, Point, Rect, RectMap};
///
/// let a = CardId::new(Column::Left, 0);
/// let b = CardId::new(Column::Right, 0);
///
/// let mut rects = RectMap::new();
/// rects.insert(a.clone(), Rect::centered_at(Point::new(10.0, 10.0), 4.0, 4.0));
/// rects.insert(b.clone(), Rect::centered_at(Point::new(50.0, 10.0), 4.0, 4.0));
///
/// let pairs = [MatchedPair::new(a, b)];
/// let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
///
/// let lines = resolve_lines(&pairs, &rects, frame);
/// assert_eq!(lines, vec![LineSegment::new(10.0, 10.0, 50.0, 10.0)]);
/// ```
pub fn resolve_lines<'a, I, S>(pairs: I, source: &S, frame: Rect) -> Vec<LineSegment>
where
    I: IntoIterator<Item = &'a MatchedPair>,
    S: RectSource + ?Sized,
{
    let origin = frame.origin();

    pairs
        .into_iter()
        .filter_map(|MatchedPair(a, b)| {
            let from = source.rect(a)?.center().relative_to(origin);
            let to = source.rect(b)?.center().relative_to(origin);
            Some(LineSegment::between(from, to))
        })
        .collect()
}
