//! Error types for fact lookups.

use thiserror::Error;

/// Errors that can occur while fetching a fact.
#[derive(Debug, Error)]
pub enum FactError {
    /// No API key in config or environment
    #[error("Fact service is not configured (missing API key)")]
    NotConfigured,

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Response body or fact payload was not the expected JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service returned no text
    #[error("Empty response from fact service")]
    EmptyResponse,

    /// Any other provider failure
    #[error("{0}")]
    Other(String),
}
