use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a rejected dictionary operation.
///
/// The set is closed and values compare by kind, so callers can match on
/// or compare against a variant directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DictionaryError {
    /// The searched word has no entry.
    #[error("could not find the word you were looking for")]
    NotFound,

    /// `add` was called for a word that already has a definition.
    #[error("word exists already")]
    WordExists,

    /// `update` was called for a word that has no definition.
    #[error("word does not exist")]
    WordDoesNotExist,
}

/// Error type for dict operations that touch I/O.
#[derive(Error, Debug)]
pub enum DictError {
    /// IO error from reading seeds or session streams.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error.
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A dictionary operation was rejected.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Result type alias for dict operations.
pub type Result<T> = std::result::Result<T, DictError>;
