//! Events the presentation layer sends in.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::geometry::Layout;
use crate::session::TimerToken;

/// Inbound event from the presentation layer.
///
/// Serializable so a host can forward events across a JS boundary as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A card was clicked.
    CardClicked { card_id: CardId },
    /// The reset button was clicked.
    ResetClicked,
    /// The viewport or layout changed; new element positions attached.
    ViewportChanged { layout: Layout },
    /// A scheduled mismatch clear fired.
    TimerFired { token: TimerToken },
    /// The completion dialog was dismissed.
    DialogClosed,
}

impl GameEvent {
    /// Click on the card with id `card_id`.
    #[must_use]
    pub fn click(card_id: impl Into<CardId>) -> Self {
        GameEvent::CardClicked {
            card_id: card_id.into(),
        }
    }
}
