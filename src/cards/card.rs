//! Cards, card ids and columns.
//!
//! ## ID Layout
//!
//! Card ids are strings of the form `<column>-<index>`:
//! - `left-0..N`: left column, authoring order
//! - `right-0..N`: right column, shuffled order
//!
//! The prefix before the first `-` is what decides whether two cards sit in
//! the same column. `Column` is derived from it, never stored beside it.
//!
//! ```
//! use pair_match::cards::{CardId, Column};
//!
//! let left = CardId::new(Column::Left, 3);
//! let right = CardId::new(Column::Right, 3);
//!
//! assert_eq!(left.as_str(), "left-3");
//! assert_eq!(right.column(), Some(Column::Right));
//! assert!(!left.same_column(&right));
//! ```

use serde::{Deserialize, Serialize};

/// One of the two card groups. Pairs must span both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Right,
}

impl Column {
    /// Id prefix for cards in this column.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Column::Left => "left",
            Column::Right => "right",
        }
    }

    /// Parse an id prefix.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "left" => Some(Column::Left),
            "right" => Some(Column::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Card identifier, unique across both columns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Id for the card at `index` in `column`.
    #[must_use]
    pub fn new(column: Column, index: usize) -> Self {
        Self(format!("{}-{}", column.prefix(), index))
    }

    /// Wrap an id reported by the presentation layer.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text before the first `-`, or the whole id if there is none.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Column named by the prefix, if it is a known one.
    #[must_use]
    pub fn column(&self) -> Option<Column> {
        Column::from_prefix(self.prefix())
    }

    /// True when both ids carry the same column prefix.
    #[must_use]
    pub fn same_column(&self, other: &CardId) -> bool {
        self.prefix() == other.prefix()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<String> for CardId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A card on the table.
///
/// `is_matched` flips to true once, when the card's pair is confirmed, and
/// only a reset (which builds new cards) brings it back.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id, column-prefixed.
    pub id: CardId,

    /// Links this card to its partner in the other column.
    pub key: String,

    /// Text shown on the card.
    pub display_value: String,

    /// Has this card's pair been found?
    pub is_matched: bool,
}

impl Card {
    /// Create an unmatched card.
    #[must_use]
    pub fn new(id: CardId, key: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            display_value: display_value.into(),
            is_matched: false,
        }
    }

    /// Column derived from the id prefix.
    #[must_use]
    pub fn column(&self) -> Option<Column> {
        self.id.column()
    }

    /// Would selecting `self` and `other` confirm a pair?
    ///
    /// Keys must match and the ids must carry different column prefixes.
    /// Symmetric in its arguments.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.key == other.key && !self.id.same_column(&other.id)
    }
}

/// A confirmed pair's two card ids, in the order they were selected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedPair(pub CardId, pub CardId);

impl MatchedPair {
    /// Record a confirmed pair.
    #[must_use]
    pub fn new(first: CardId, second: CardId) -> Self {
        Self(first, second)
    }
}
