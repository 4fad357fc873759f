//! End-of-game summary shown in the completion dialog.

use serde::{Deserialize, Serialize};

use crate::session::GameSession;

/// How the game went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryOutcome {
    /// Every pair found without a single miss.
    Perfect,
    /// Every pair found, with some misses.
    Complete { misses: u32 },
    /// Not every pair found yet.
    Partial { found: usize, total: usize, misses: u32 },
}

/// Counters the dialog reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub score: usize,
    pub total_pairs: usize,
    pub incorrect_attempts: u32,
}

impl CompletionSummary {
    #[must_use]
    pub const fn new(score: usize, total_pairs: usize, incorrect_attempts: u32) -> Self {
        Self {
            score,
            total_pairs,
            incorrect_attempts,
        }
    }

    /// Read the counters off a session.
    #[must_use]
    pub fn of(session: &GameSession) -> Self {
        Self::new(
            session.score(),
            session.total_pairs(),
            session.incorrect_attempts(),
        )
    }

    /// Classify the result.
    #[must_use]
    pub fn outcome(&self) -> SummaryOutcome {
        if self.score == self.total_pairs {
            if self.incorrect_attempts == 0 {
                SummaryOutcome::Perfect
            } else {
                SummaryOutcome::Complete {
                    misses: self.incorrect_attempts,
                }
            }
        } else {
            SummaryOutcome::Partial {
                found: self.score,
                total: self.total_pairs,
                misses: self.incorrect_attempts,
            }
        }
    }

    /// Dialog text.
    #[must_use]
    pub fn message(&self) -> String {
        self.outcome().to_string()
    }
}

impl std::fmt::Display for SummaryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryOutcome::Perfect => {
                f.write_str("¡Excelente! ¡Has acertado todas las parejas al primer intento! ¡Perfecto!")
            }
            SummaryOutcome::Complete { misses } => write!(
                f,
                "¡Excelente! ¡Has acertado todas las parejas! Tuviste {} intentos fallidos.",
                misses
            ),
            SummaryOutcome::Partial {
                found,
                total,
                misses,
            } => write!(
                f,
                "¡Bien hecho! Has acertado {} de {} parejas. Tuviste {} intentos fallidos.",
                found, total, misses
            ),
        }
    }
}
