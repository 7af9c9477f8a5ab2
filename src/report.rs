//! Flat, serializable view of a move outcome for non-interactive front ends.

use serde::Serialize;

use crate::game::{GameSession, MoveOutcome, Seat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub column: usize,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<Seat>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MoveReport {
    /// Describe `outcome`, the result of submitting `column` to `session`.
    pub fn new(column: usize, outcome: &MoveOutcome, session: &GameSession) -> Self {
        let placed = outcome.placed();
        MoveReport {
            column,
            accepted: outcome.accepted(),
            row: placed.map(|mv| mv.row),
            sequence: placed.map(|mv| mv.sequence),
            seat: placed.map(|mv| mv.seat),
            status: outcome.status().label(),
            winner: outcome
                .winner()
                .map(|seat| session.player(seat).color().to_string()),
            reason: outcome.rejection().map(|r| r.to_string()),
        }
    }
}
