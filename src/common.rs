use serde::{Deserialize, Serialize};

use crate::DictionaryError;

/// Request read by a [`DictSession`](crate::DictSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// Look up the definition of a word.
    Search {
        /// The word to look up.
        word: String,
    },
    /// Add a word that is not yet defined.
    Add {
        /// The word to add.
        word: String,
        /// Its definition.
        definition: String,
    },
    /// Replace the definition of an existing word.
    Update {
        /// The word to update.
        word: String,
        /// The new definition.
        definition: String,
    },
}

/// Response written for each request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Operation succeeded, with the definition for searches.
    Ok(Option<String>),
    /// Operation was rejected by the dictionary.
    Err(DictionaryError),
}
