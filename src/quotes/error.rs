//! Errors raised by the quote store.

use std::path::PathBuf;

/// Errors that can occur while changing or persisting the quote book.
///
/// An empty filter result is not an error; [`QuoteStore::pick_random`]
/// reports it as `None`.
///
/// [`QuoteStore::pick_random`]: super::QuoteStore::pick_random
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// A required field was empty when adding a quote.
    #[error("Please enter both a quote and a category ({field} is empty)")]
    Validation {
        /// Name of the empty field.
        field: &'static str,
    },

    /// The import payload was not a JSON array of valid quotes.
    #[error("Import failed: {0}")]
    Import(String),

    /// An import or export file could not be read or written.
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The collection could not be serialized.
    #[error("Failed to serialize quotes: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing key-value store failed.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
