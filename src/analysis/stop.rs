//! Stop word sets.
//!
//! Stop words are excluded from word and mistake counts. Entries are
//! lowercased and trimmed but otherwise kept verbatim, so a list entry of
//! `"a."` only matches the token `"a."`.
//!
//! # Examples
//!
//! ```
//! use lexispell::analysis::stop::StopWords;
//!
//! let stop_words = StopWords::from_words(["A", " am ", "I"]);
//! assert!(stop_words.contains("am"));
//! assert!(!stop_words.contains("cat"));
//! ```

use std::io::BufRead;
use std::path::Path;
use std::sync::LazyLock;

use ahash::AHashSet;

use crate::error::Result;
use crate::spelling::source::{read_word_list, read_word_list_file};

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with", "i", "am", "me", "my",
];

static DEFAULT_ENGLISH: LazyLock<StopWords> =
    LazyLock::new(|| StopWords::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied()));

/// An immutable set of normalized stop words.
#[derive(Clone, Debug, Default)]
pub struct StopWords {
    words: AHashSet<String>,
}

impl StopWords {
    /// Create an empty stop word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw entries; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let normalized = word.as_ref().to_lowercase().trim().to_string();
                (!normalized.is_empty()).then_some(normalized)
            })
            .collect();
        StopWords { words }
    }

    /// The built-in English list.
    pub fn english() -> Self {
        DEFAULT_ENGLISH.clone()
    }

    /// Read one stop word per line from `reader`.
    pub fn from_reader<R: BufRead>(reader: R, name: &str) -> Result<Self> {
        let lines = read_word_list(reader, name)?;
        let stop_words = Self::from_words(lines);
        log::info!("loaded {} stop words from {name}", stop_words.len());
        Ok(stop_words)
    }

    /// Read one stop word per line from the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let lines = read_word_list_file(path)?;
        let stop_words = Self::from_words(lines);
        log::info!(
            "loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        Ok(stop_words)
    }

    /// Check whether `word` is a stop word. The lookup is exact.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stop words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_normalization_keeps_punctuation() {
        let stop_words = StopWords::from_words(["a. ", "AM", "me", "   ", ""]);

        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("a."));
        assert!(!stop_words.contains("a"));
        assert!(stop_words.contains("am"));
        assert!(!stop_words.contains("AM"));
    }

    #[test]
    fn test_english_defaults() {
        let stop_words = StopWords::english();
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("am"));
        assert!(!stop_words.contains("hello"));
    }

    #[test]
    fn test_from_reader() {
        let reader = Cursor::new("a\nam\r\ni\n\n");
        let stop_words = StopWords::from_reader(reader, "inline").unwrap();

        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("i"));
        let mut words: Vec<&str> = stop_words.iter().collect();
        words.sort();
        assert_eq!(words, ["a", "am", "i"]);
    }

    #[test]
    fn test_empty_set() {
        let stop_words = StopWords::new();
        assert!(stop_words.is_empty());
        assert!(!stop_words.contains(""));
    }
}
