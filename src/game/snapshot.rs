//! Read-only view handed to the presentation layer after every mutation.

use serde::Serialize;

use super::summary::CompletionSummary;
use crate::cards::{Card, CardId};
use crate::geometry::LineSegment;
use crate::session::GameSession;

/// One card as the view draws it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: CardId,
    pub display_value: String,
    pub is_matched: bool,
    pub is_selected: bool,
}

impl CardView {
    fn of(card: &Card, session: &GameSession) -> Self {
        Self {
            id: card.id.clone(),
            display_value: card.display_value.clone(),
            is_matched: card.is_matched,
            is_selected: session.is_selected(&card.id),
        }
    }
}

/// Everything the view needs to render one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub left_column: Vec<CardView>,
    pub right_column: Vec<CardView>,
    pub selection_ids: Vec<CardId>,
    pub score: usize,
    pub total_pairs: usize,
    pub incorrect_attempts: u32,
    pub is_checking: bool,
    pub is_complete: bool,
    pub line_segments: Vec<LineSegment>,
    /// Present while the completion dialog is open.
    pub dialog: Option<CompletionSummary>,
}

impl Snapshot {
    pub(crate) fn capture(
        session: &GameSession,
        line_segments: &[LineSegment],
        dialog_open: bool,
    ) -> Self {
        Self {
            left_column: session.left_column().iter().map(|c| CardView::of(c, session)).collect(),
            right_column: session.right_column().iter().map(|c| CardView::of(c, session)).collect(),
            selection_ids: session.selection_ids().cloned().collect(),
            score: session.score(),
            total_pairs: session.total_pairs(),
            incorrect_attempts: session.incorrect_attempts(),
            is_checking: session.is_checking(),
            is_complete: session.is_complete(),
            line_segments: line_segments.to_vec(),
            dialog: (dialog_open && session.is_complete())
                .then(|| CompletionSummary::of(session)),
        }
    }

    /// Find a card view in either column.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&CardView> {
        self.left_column
            .iter()
            .chain(self.right_column.iter())
            .find(|c| c.id == *id)
    }
}
