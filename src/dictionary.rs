use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::DictionaryError;

/// An in-memory mapping from words to their definitions.
///
/// Words are case-sensitive. Entries can be added and updated but never
/// removed, and each mutation checks for the word first: `add` refuses to
/// overwrite, `update` refuses to create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the definition of `word`.
    ///
    /// Returns `DictionaryError::NotFound` if the word has no entry.
    pub fn search(&self, word: &str) -> Result<&str, DictionaryError> {
        self.entries
            .get(word)
            .map(String::as_str)
            .ok_or(DictionaryError::NotFound)
    }

    /// Adds a new word with its definition.
    ///
    /// Returns `DictionaryError::WordExists` and leaves the existing
    /// definition untouched if the word is already present.
    pub fn add(
        &mut self,
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        match self.entries.entry(word.into()) {
            Entry::Occupied(_) => Err(DictionaryError::WordExists),
            Entry::Vacant(e) => {
                e.insert(definition.into());
                Ok(())
            }
        }
    }

    /// Replaces the definition of an existing word.
    ///
    /// Returns `DictionaryError::WordDoesNotExist` if the word is absent;
    /// nothing is inserted in that case.
    pub fn update(
        &mut self,
        word: &str,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        let current = self
            .entries
            .get_mut(word)
            .ok_or(DictionaryError::WordDoesNotExist)?;
        *current = definition.into();
        Ok(())
    }

    /// Returns `true` if `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(word, definition)` pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl From<HashMap<String, String>> for Dictionary {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<W, D> FromIterator<(W, D)> for Dictionary
where
    W: Into<String>,
    D: Into<String>,
{
    /// Later pairs win when a word repeats, as with literal map construction.
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(word, definition)| (word.into(), definition.into()))
                .collect(),
        }
    }
}

/// Iterator over the entries of a [`Dictionary`].
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(word, definition)| (word.as_str(), definition.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
