//! Geometry for the connector overlay.
//!
//! Given the matched pairs and the live positions of their cards, compute
//! one line per pair between the two card centres, in the overlay frame's
//! local space. Positions come from a `RectSource` the presentation layer
//! supplies; nothing here depends on a rendering framework.

pub mod overlay;
pub mod rect;
pub mod resolver;
pub mod source;

pub use overlay::Overlay;
pub use rect::{Point, Rect};
pub use resolver::{resolve_lines, LineSegment};
pub use source::{Layout, RectMap, RectSource};
