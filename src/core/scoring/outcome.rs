use serde::Serialize;

use crate::core::Position;

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ScoreRecord {
    pub file_name: String,
    pub position: Position,
    pub score_b: f64,
    pub score_c: f64,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum SkipReason {
    /// The position is absent from the track.
    NoMatch,
    /// The position occurs in the track more than once.
    Ambiguous,
    /// Nothing with a non-zero weight is left in the background window.
    DegenerateWindow,
    /// Zero counts over a zero background.
    UndefinedScore,
}

/// Result of scoring a single (sample, position) pair.
#[derive(Clone, PartialEq, Debug)]
pub enum Outcome {
    Found(ScoreRecord),
    Skipped(SkipReason),
}

impl Outcome {
    #[inline]
    pub fn found(self) -> Option<ScoreRecord> {
        match self {
            Outcome::Found(record) => Some(record),
            Outcome::Skipped(_) => None,
        }
    }
}
