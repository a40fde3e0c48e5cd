//! First-occurrence bookkeeping for misspelled words.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A misspelled word and the first line it appeared on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misspelling {
    pub word: String,
    pub line: usize,
}

/// Records the first line number of each distinct misspelled word.
///
/// Once a word is recorded its line never changes.
///
/// # Examples
///
/// ```
/// use lexispell::spelling::MisspellingTracker;
///
/// let mut tracker = MisspellingTracker::new();
/// tracker.record_if_absent("catd", 1);
/// tracker.record_if_absent("catd", 5);
///
/// assert_eq!(tracker.first_seen("catd"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MisspellingTracker {
    first_seen: AHashMap<String, usize>,
}

impl MisspellingTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` at `line` unless it is already known. Returns whether a
    /// new record was inserted; a duplicate is a no-op, never an error.
    ///
    /// # Panics
    ///
    /// Panics if `line` is 0 or `word` has fewer than two characters.
    pub fn record_if_absent(&mut self, word: &str, line: usize) -> bool {
        assert!(line >= 1, "line numbers start at 1");
        assert!(
            word.chars().count() >= 2,
            "tracked words carry at least one bigram: {word:?}"
        );

        if self.first_seen.contains_key(word) {
            return false;
        }
        self.first_seen.insert(word.to_string(), line);
        true
    }

    /// The first line `word` was recorded on.
    pub fn first_seen(&self, word: &str) -> Option<usize> {
        self.first_seen.get(word).copied()
    }

    /// Read-only view of every record, keyed by word.
    pub fn snapshot(&self) -> BTreeMap<String, usize> {
        self.first_seen
            .iter()
            .map(|(word, &line)| (word.clone(), line))
            .collect()
    }

    /// Every record ordered by line, then word.
    pub fn misspellings(&self) -> Vec<Misspelling> {
        let mut records: Vec<Misspelling> = self
            .first_seen
            .iter()
            .map(|(word, &line)| Misspelling {
                word: word.clone(),
                line,
            })
            .collect();
        records.sort_unstable_by(|a, b| a.line.cmp(&b.line).then_with(|| a.word.cmp(&b.word)));
        records
    }

    /// Number of distinct misspelled words.
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Forget every record.
    pub fn clear(&mut self) {
        self.first_seen.clear();
    }
}
