//! Ranked nearest-neighbour suggestions over a [`Dictionary`].

use std::cmp::Ordering;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::dictionary::Dictionary;
use crate::vector::bigram::WordVector;
use crate::vector::similarity::cosine_similarity;

/// Dictionary size from which scoring runs on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// A dictionary word together with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Cosine similarity to the query, 0.0 to 1.0.
    pub score: f64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(word: S, score: f64) -> Self {
        Suggestion {
            word: word.into(),
            score,
        }
    }
}

/// Ranking order: higher score first, then the word in ascending order.
fn rank_order(a: &(f64, &WordVector), b: &(f64, &WordVector)) -> Ordering {
    b.0.partial_cmp(&a.0)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.1.word().cmp(b.1.word()))
}

/// Finds the dictionary words closest to a query word.
///
/// Every entry is scored against the query, so a query costs one cosine
/// similarity per dictionary word. Ties are broken by the word itself, which
/// makes results independent of the dictionary's iteration order.
///
/// # Examples
///
/// ```
/// use lexispell::spelling::{Dictionary, SuggestionRanker};
///
/// let dictionary = Dictionary::build(["cat", "cats", "dog", "catalog"]);
/// let ranker = SuggestionRanker::new(&dictionary);
///
/// assert_eq!(ranker.find_closest("catd", 2).unwrap(), ["cat", "cats"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRanker<'a> {
    dictionary: &'a Dictionary,
    parallel_threshold: usize,
}

impl<'a> SuggestionRanker<'a> {
    /// Create a ranker over `dictionary`.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        SuggestionRanker {
            dictionary,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Score on the rayon pool once the dictionary has at least `threshold`
    /// entries. The result does not depend on this setting.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// The `n` closest words, best first.
    ///
    /// Fails with [`LexispellError::InvalidWord`](crate::error::LexispellError::InvalidWord)
    /// when `query` has fewer than two characters, whether or not it is a
    /// dictionary word. `n == 0` yields nothing; `n` larger than the dictionary
    /// yields every entry.
    pub fn find_closest(&self, query: &str, n: usize) -> Result<Vec<String>> {
        Ok(self
            .rank(query, n)?
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect())
    }

    /// Like [`find_closest`](Self::find_closest), keeping the scores.
    pub fn rank(&self, query: &str, n: usize) -> Result<Vec<Suggestion>> {
        let query = WordVector::new(query)?;
        if n == 0 || self.dictionary.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let mut scored = self.score_all(&query);

        if n < scored.len() {
            scored.select_nth_unstable_by(n - 1, rank_order);
            scored.truncate(n);
        }
        scored.sort_unstable_by(rank_order);

        log::debug!(
            "ranked {} entries for {:?} in {:?}",
            self.dictionary.len(),
            query.word(),
            start.elapsed()
        );

        Ok(scored
            .into_iter()
            .map(|(score, entry)| Suggestion::new(entry.word(), score))
            .collect())
    }

    fn score_all(&self, query: &WordVector) -> Vec<(f64, &'a WordVector)> {
        if self.dictionary.len() >= self.parallel_threshold {
            let entries: Vec<&'a WordVector> = self.dictionary.iter().collect();
            entries
                .into_par_iter()
                .map(|entry| (cosine_similarity(query, entry), entry))
                .collect()
        } else {
            self.dictionary
                .iter()
                .map(|entry| (cosine_similarity(query, entry), entry))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexispellError;

    fn animals() -> Dictionary {
        Dictionary::build(["cat", "cats", "dog", "bird", "catalog", "hello", "cart"])
    }

    #[test]
    fn test_find_closest_catd() {
        let dictionary = animals();
        let ranker = SuggestionRanker::new(&dictionary);

        assert_eq!(ranker.find_closest("catd", 2).unwrap(), ["cat", "cats"]);
    }

    #[test]
    fn test_scores_descend() {
        let dictionary = animals();
        let suggestions = SuggestionRanker::new(&dictionary).rank("catd", 10).unwrap();

        assert_eq!(suggestions.len(), dictionary.len());
        for pair in suggestions.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!((suggestions[0].score - 2.0 / 6.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_ties_break_alphabetically() {
        // "ab" scores 1/sqrt(2) against each of these.
        let forward = Dictionary::build(["abz", "aby", "abx"]);
        let backward = Dictionary::build(["abx", "aby", "abz"]);

        for dictionary in [&forward, &backward] {
            let ranker = SuggestionRanker::new(dictionary);
            assert_eq!(ranker.find_closest("ab", 3).unwrap(), ["abx", "aby", "abz"]);
            assert_eq!(ranker.find_closest("ab", 2).unwrap(), ["abx", "aby"]);
        }
    }

    #[test]
    fn test_zero_similarity_entries_are_still_ranked() {
        let dictionary = Dictionary::build(["xy", "zw", "ab"]);
        let ranker = SuggestionRanker::new(&dictionary);
        assert_eq!(ranker.find_closest("ab", 3).unwrap(), ["ab", "xy", "zw"]);
    }

    #[test]
    fn test_edge_cases() {
        let dictionary = animals();
        let ranker = SuggestionRanker::new(&dictionary);

        assert!(ranker.find_closest("catd", 0).unwrap().is_empty());
        assert_eq!(ranker.find_closest("catd", 100).unwrap().len(), dictionary.len());

        let empty = Dictionary::default();
        assert!(SuggestionRanker::new(&empty).find_closest("catd", 3).unwrap().is_empty());
    }

    #[test]
    fn test_short_query_fails() {
        let dictionary = animals();
        let ranker = SuggestionRanker::new(&dictionary);

        assert!(matches!(
            ranker.find_closest("c", 2),
            Err(LexispellError::InvalidWord(_))
        ));
        assert!(ranker.find_closest("", 0).is_err());
    }

    #[test]
    fn test_query_in_dictionary_ranks_first() {
        let dictionary = animals();
        let ranker = SuggestionRanker::new(&dictionary);
        assert_eq!(ranker.find_closest("cats", 1).unwrap(), ["cats"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let words: Vec<String> = (0..500)
            .map(|i| format!("w{}{}", i % 37, i % 11))
            .chain(["cat", "cats", "catalog"].map(String::from))
            .collect();
        let dictionary = Dictionary::build(&words);

        let sequential = SuggestionRanker::new(&dictionary).with_parallel_threshold(usize::MAX);
        let parallel = SuggestionRanker::new(&dictionary).with_parallel_threshold(0);

        for query in ["catd", "w1", "w123", "zz"] {
            assert_eq!(
                sequential.rank(query, 25).unwrap(),
                parallel.rank(query, 25).unwrap(),
                "{query}"
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let dictionary = Dictionary::build(["ab", "ba", "abab", "baba", "aab", "bba"]);
        let ranker = SuggestionRanker::new(&dictionary);
        let first = ranker.find_closest("abba", 4).unwrap();
        for _ in 0..10 {
            assert_eq!(ranker.find_closest("abba", 4).unwrap(), first);
        }
    }
}
