use std::fmt;

/// Errors produced by the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The lead record is missing a required identity field (`title`, `company`).
    /// No partial scoring is attempted for such a lead.
    InvalidInput(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::InvalidInput(msg) => write!(f, "Invalid lead: {}", msg),
        }
    }
}

impl std::error::Error for ScoreError {}
