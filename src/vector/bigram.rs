//! Sparse bigram-frequency vectors.
//!
//! A word is represented by the number of times each overlapping pair of
//! characters occurs in it. `"banana"` becomes `{ba: 1, an: 2, na: 2}` with a
//! norm of `sqrt(1 + 4 + 4) = 3`.
//!
//! # Examples
//!
//! ```
//! use lexispell::vector::vectorize;
//!
//! let vector = vectorize("banana").unwrap();
//! assert_eq!(vector.count("an"), 2);
//! assert_eq!(vector.norm(), 3.0);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use ahash::AHashMap;

use crate::error::{LexispellError, Result};

/// A pair of adjacent characters.
pub type Bigram = [char; 2];

/// The bigram-frequency vector of a single normalized word.
///
/// Equality and hashing only look at the word itself, so a `HashSet<WordVector>`
/// can be queried with a plain `&str`.
#[derive(Debug, Clone)]
pub struct WordVector {
    word: String,
    bigrams: AHashMap<Bigram, u32>,
    /// Sum of squared counts, kept exact so that self-similarity is exactly 1.
    squared_norm: u64,
    norm: f64,
}

impl WordVector {
    /// Vectorize a word. Fails with [`LexispellError::InvalidWord`] when the
    /// word has fewer than two characters.
    pub fn new<S: Into<String>>(word: S) -> Result<Self> {
        let word = word.into();
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < 2 {
            return Err(LexispellError::invalid_word(word));
        }

        let mut bigrams: AHashMap<Bigram, u32> = AHashMap::with_capacity(chars.len() - 1);
        for window in chars.windows(2) {
            *bigrams.entry([window[0], window[1]]).or_insert(0) += 1;
        }

        let squared_norm = bigrams
            .values()
            .map(|&count| u64::from(count) * u64::from(count))
            .sum::<u64>();

        Ok(WordVector {
            word,
            bigrams,
            squared_norm,
            norm: (squared_norm as f64).sqrt(),
        })
    }

    /// The word this vector was built from.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Bigram counts.
    pub fn bigrams(&self) -> &AHashMap<Bigram, u32> {
        &self.bigrams
    }

    /// Number of distinct bigrams.
    pub fn dimension(&self) -> usize {
        self.bigrams.len()
    }

    /// Occurrences of `bigram` (given as a two-character string) in the word.
    /// Anything that is not exactly two characters counts zero.
    pub fn count(&self, bigram: &str) -> u32 {
        let mut chars = bigram.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => self.count_of(&[first, second]),
            _ => 0,
        }
    }

    /// Occurrences of `bigram` in the word.
    pub fn count_of(&self, bigram: &Bigram) -> u32 {
        self.bigrams.get(bigram).copied().unwrap_or(0)
    }

    /// Euclidean norm of the count vector.
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Sum of squared counts (the norm before the square root).
    pub fn squared_norm(&self) -> u64 {
        self.squared_norm
    }
}

/// Vectorize `word`; see [`WordVector::new`].
pub fn vectorize(word: &str) -> Result<WordVector> {
    WordVector::new(word)
}

impl PartialEq for WordVector {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordVector {}

impl Hash for WordVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must hash exactly like `str` for the `Borrow<str>` lookups.
        self.word.as_str().hash(state);
    }
}

impl Borrow<str> for WordVector {
    fn borrow(&self) -> &str {
        &self.word
    }
}

impl fmt::Display for WordVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)
    }
}
