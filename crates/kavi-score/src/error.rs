//! Scoring errors.

use std::fmt;

use kavi_text::CursorError;

/// Errors from [`MatchScorer`](crate::MatchScorer) implementations.
///
/// A missing match is not an error; it is a zero-rank [`Score`](crate::Score).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The scorer drove its text cursor out of range.
    Cursor(CursorError),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cursor(err) => write!(f, "cursor misuse while scoring: {err}"),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cursor(err) => Some(err),
        }
    }
}

impl From<CursorError> for ScoreError {
    fn from(err: CursorError) -> Self {
        Self::Cursor(err)
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
