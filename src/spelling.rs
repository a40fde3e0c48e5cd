//! Spell checking: dictionary lookup, misspelling bookkeeping and ranked
//! suggestions.
//!
//! The data flow for one document is:
//!
//! ```text
//! line → MetadataComputer → Dictionary::contains → MisspellingTracker
//!      … end of document → SuggestionRanker::find_closest per misspelling
//! ```

pub mod checker;
pub mod dictionary;
pub mod metadata;
pub mod source;
pub mod suggest;
pub mod tracker;

// Re-export commonly used types
pub use checker::SpellChecker;
pub use dictionary::Dictionary;
pub use metadata::{Metadata, MetadataComputer};
pub use suggest::{Suggestion, SuggestionRanker};
pub use tracker::{Misspelling, MisspellingTracker};
