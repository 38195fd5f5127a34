/*!
 * Error types for the content-translator library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with the translation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication or missing credentials
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur during batch translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider returned a different number of translations than requested.
    /// This is an integration bug, never a user-facing condition.
    #[error(
        "provider returned {actual} translations for {expected} texts; first unmatched index {index}"
    )]
    ResponseLengthMismatch {
        /// Number of texts sent to the provider
        expected: usize,
        /// Number of translations received
        actual: usize,
        /// First input index with no matching translation
        index: usize,
    },

    /// An entry resolved to neither the cache-hit map nor the fresh-translation
    /// map during the merge step. Signals a bug in the merge logic.
    #[error("entry '{content_key}' resolved to neither cache hit nor fresh translation")]
    UnresolvedEntry {
        /// Content key of the offending entry
        content_key: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the translation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from batch translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
