//! Error types for analysis runs.
//!
//! Almost nothing in the pipeline fails: empty or malformed text degrades to
//! empty structures and zero metrics. These errors cover the few cases a
//! caller must handle.

use thiserror::Error;

/// Errors that can occur when running an analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Neither a transcript nor a flowchart was supplied
    #[error("Missing inputs: a transcript or a flowchart is required")]
    MissingInputs,

    /// Strict mode rejects transcripts with no words
    #[error("Transcript is empty")]
    EmptyTranscript,

    /// An options document could not be read
    #[error("Invalid analysis options: {message}")]
    InvalidOptions { message: String },

    /// A report could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
