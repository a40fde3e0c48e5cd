//! The reference dictionary used for membership checks and suggestions.

use std::io::BufRead;
use std::path::Path;

use ahash::AHashSet;

use crate::analysis::normalize_word;
use crate::error::Result;
use crate::spelling::source::{read_word_list, read_word_list_file};
use crate::vector::bigram::WordVector;

/// An immutable set of vectorized, normalized words.
///
/// Entries are normalized with [`normalize_word`] and deduplicated; raw
/// entries that normalize to fewer than two characters are skipped.
///
/// # Examples
///
/// ```
/// use lexispell::spelling::Dictionary;
///
/// let dictionary = Dictionary::build(["Cat", "cat", "CAT!", "d"]);
/// assert_eq!(dictionary.len(), 1);
/// assert!(dictionary.contains("cat"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: AHashSet<WordVector>,
}

impl Dictionary {
    /// Build a dictionary from raw words. Input order does not matter.
    pub fn build<I, S>(raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = AHashSet::new();
        let mut skipped = 0usize;

        for raw in raw_words {
            match normalize_word(raw.as_ref()).map(WordVector::new) {
                Some(Ok(vector)) => {
                    entries.insert(vector);
                }
                // normalize_word already enforces the length, so vectorizing cannot fail here.
                Some(Err(_)) | None => skipped += 1,
            }
        }

        log::debug!(
            "built dictionary with {} entries ({skipped} raw entries skipped)",
            entries.len()
        );
        Dictionary { entries }
    }

    /// Read one word per line from `reader`.
    pub fn from_reader<R: BufRead>(reader: R, name: &str) -> Result<Self> {
        let dictionary = Self::build(read_word_list(reader, name)?);
        log::info!("loaded {} dictionary words from {name}", dictionary.len());
        Ok(dictionary)
    }

    /// Read one word per line from the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dictionary = Self::build(read_word_list_file(path)?);
        log::info!(
            "loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Exact membership test against the normalized entries.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    /// The vector stored for `word`, if any.
    pub fn get(&self, word: &str) -> Option<&WordVector> {
        self.entries.get(word)
    }

    /// Iterate over all entries. The order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &WordVector> {
        self.entries.iter()
    }

    /// Get the number of unique words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All words, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.iter().map(WordVector::word).collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::build(iter)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a WordVector;
    type IntoIter = std::collections::hash_set::Iter<'a, WordVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
