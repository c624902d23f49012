use thiserror::Error;

/// A human-readable rejection of a submission.
///
/// The form variant carries a single message; the API variant carries all
/// issues joined with `", "`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Joins every collected issue into one message.
    pub fn from_issues(issues: Vec<String>) -> Self {
        Self {
            message: issues.join(", "),
        }
    }
}
