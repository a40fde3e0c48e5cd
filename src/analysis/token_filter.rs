//! Token filters reshape or drop tokens produced by a tokenizer.
//!
//! - [`LowercaseFilter`] - Converts tokens to lowercase
//! - [`StripFilter`] - Trims whitespace and outer non-alphanumeric characters
//! - [`MinLengthFilter`] - Removes tokens shorter than a character count
//!
//! # Examples
//!
//! ```
//! use lexispell::analysis::token::Token;
//! use lexispell::analysis::token_filter::{Filter, LowercaseFilter};
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::MIN_WORD_LENGTH;
use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}

/// Trim `text` and drop any leading or trailing character that is not
/// alphanumeric.
pub fn strip_outer(text: &str) -> &str {
    text.trim().trim_matches(|c: char| !c.is_alphanumeric())
}

/// A filter that converts tokens to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.map(|token| {
            let lowered = token.text.to_lowercase();
            token.with_text(lowered)
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// A filter that trims tokens and strips punctuation from both ends.
///
/// Inner punctuation is kept: `"don't"` stays `"don't"`, `"(cat),"` becomes `"cat"`.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.map(|token| {
            let stripped = strip_outer(&token.text).to_string();
            token.with_text(stripped)
        }))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}

/// A filter that removes tokens shorter than `min_length` characters.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter keeping tokens of at least `min_length` characters.
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new(MIN_WORD_LENGTH)
    }
}

impl Filter for MinLengthFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.filter(move |token| token.char_len() >= self.min_length))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
