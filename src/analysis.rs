//! Text analysis for spell checking.
//!
//! Lines are split into tokens and pushed through a filter chain before any
//! dictionary lookup happens:
//!
//! ```text
//! WhitespaceTokenizer → Lowercase → Strip → MinLength(2)
//! ```
//!
//! Stop words are kept in a separate [`stop::StopWords`] set so that callers
//! can pass the set they loaded alongside each line.

pub mod analyzer;
pub mod stop;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

use self::token_filter::strip_outer;

/// Minimum length, in characters, of a word that takes part in checking.
pub const MIN_WORD_LENGTH: usize = 2;

/// Normalize a raw dictionary entry.
///
/// Lowercases, trims, strips leading and trailing non-alphanumeric characters,
/// and returns `None` if fewer than [`MIN_WORD_LENGTH`] characters remain.
///
/// ```
/// use lexispell::analysis::normalize_word;
///
/// assert_eq!(normalize_word("  &.Cat& ").as_deref(), Some("cat"));
/// assert_eq!(normalize_word("CAT!").as_deref(), Some("cat"));
/// assert_eq!(normalize_word("d"), None);
/// ```
pub fn normalize_word(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    let stripped = strip_outer(lowered.trim());
    if stripped.chars().count() < MIN_WORD_LENGTH {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Whether `c` separates words for character counting.
pub fn is_line_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Number of characters in `line` that are not a space, tab or newline.
///
/// ```
/// use lexispell::analysis::count_characters;
///
/// assert_eq!(count_characters("hello, i am a cat!"), 14);
/// ```
pub fn count_characters(line: &str) -> usize {
    line.chars().filter(|&c| !is_line_whitespace(c)).count()
}
