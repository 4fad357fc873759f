//! The in-progress pick: zero, one or two cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};

/// Currently chosen cards, in click order.
///
/// Holds at most two cards with distinct ids. SmallVec keeps both inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cards: SmallVec<[Card; 2]>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected cards (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is nothing selected?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is `id` selected?
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.iter().any(|c| c.id == *id)
    }

    /// The selected cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Selected ids, in click order.
    pub fn ids(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().map(|c| &c.id)
    }

    /// First pick, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Both picks, once the selection is full.
    #[must_use]
    pub fn pair(&self) -> Option<(&Card, &Card)> {
        match self.cards.as_slice() {
            [a, b] => Some((a, b)),
            _ => None,
        }
    }

    /// Add a card. Caller guarantees the selection is not full and the id is new.
    pub fn push(&mut self, card: Card) {
        debug_assert!(self.cards.len() < 2, "selection holds at most two cards");
        debug_assert!(!self.contains(&card.id), "card selected twice");
        self.cards.push(card);
    }

    /// Drop everything and select only `card`.
    pub fn replace(&mut self, card: Card) {
        self.cards.clear();
        self.cards.push(card);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
