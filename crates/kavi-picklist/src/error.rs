//! Pick-list errors.

use std::fmt;

use kavi_score::ScoreError;

/// Errors from ranking a list or loading its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickListError {
    /// The scorer failed; propagated unchanged from the pass.
    Score(ScoreError),
    /// A rank configuration document could not be parsed.
    Config(String),
}

impl fmt::Display for PickListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score(err) => write!(f, "scoring failed: {err}"),
            Self::Config(msg) => write!(f, "invalid rank config: {msg}"),
        }
    }
}

impl std::error::Error for PickListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Score(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}

impl From<ScoreError> for PickListError {
    fn from(err: ScoreError) -> Self {
        Self::Score(err)
    }
}

pub type Result<T> = std::result::Result<T, PickListError>;
