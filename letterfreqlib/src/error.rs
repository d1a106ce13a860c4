//! Error types for letterfreqlib

use thiserror::Error;

/// Errors that can occur while building a letter frequency report.
///
/// Counting and ranking are total: any text, including an empty one,
/// produces a valid result. The only failures come from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LetterFreqError {
    /// A report option is out of range or would produce a malformed report
    #[error("invalid configuration for '{field}': {message}")]
    InvalidConfig { field: String, message: String },
}

impl LetterFreqError {
    pub(crate) fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        LetterFreqError::InvalidConfig {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
