//! Validation errors surfaced by the selection state machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A recoverable validation failure.
///
/// Carried as a value in [`FilterContext`](crate::context::FilterContext)
/// rather than returned as `Err`: an invalid commit leaves the machine in
/// editing mode with the offending input intact, and the embedder decides
/// how to surface the message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// The context field the failure concerns
    pub field: String,
    /// Human-readable description
    pub message: String,
}

impl ValidationError {
    /// The failure raised when a committed value is not in the vocabulary.
    ///
    /// An empty committed value is reported as `"" does not exist`.
    pub fn unknown_label(value: &str) -> Self {
        let shown = if value.is_empty() { "\"\"" } else { value };
        Self {
            field: "label".to_string(),
            message: format!("{shown} does not exist"),
        }
    }
}
