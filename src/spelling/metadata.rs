//! Per-line metadata and the stateful computer that produces it.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::count_characters;
use crate::analysis::stop::StopWords;
use crate::spelling::dictionary::Dictionary;
use crate::spelling::tracker::MisspellingTracker;

/// Counts describing a line or a whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metadata {
    /// Characters other than spaces, tabs and newlines.
    pub characters: usize,
    /// Qualifying words: normalized, at least two characters, not stop words.
    pub words: usize,
    /// Qualifying words missing from the dictionary, counting repeats.
    pub mistakes: usize,
}

impl Metadata {
    /// Create a new metadata value.
    pub fn new(characters: usize, words: usize, mistakes: usize) -> Self {
        Metadata {
            characters,
            words,
            mistakes,
        }
    }
}

impl Add for Metadata {
    type Output = Metadata;

    fn add(self, other: Metadata) -> Metadata {
        Metadata {
            characters: self.characters + other.characters,
            words: self.words + other.words,
            mistakes: self.mistakes + other.mistakes,
        }
    }
}

impl AddAssign for Metadata {
    fn add_assign(&mut self, other: Metadata) {
        *self = *self + other;
    }
}

impl Sum for Metadata {
    fn sum<I: Iterator<Item = Metadata>>(iter: I) -> Metadata {
        iter.fold(Metadata::default(), Add::add)
    }
}

/// Processes one document line at a time, in order.
///
/// The computer owns the session state: the number of the next line and the
/// [`MisspellingTracker`]. Use a fresh instance for every document.
///
/// # Examples
///
/// ```
/// use lexispell::analysis::stop::StopWords;
/// use lexispell::spelling::{Dictionary, Metadata, MetadataComputer};
///
/// let dictionary = Dictionary::build(["hello", "cat"]);
/// let stop_words = StopWords::from_words(["a", "am", "i"]);
/// let mut computer = MetadataComputer::new();
///
/// let metadata = computer.process_line("hello, i am a cat!", &dictionary, &stop_words);
/// assert_eq!(metadata, Metadata::new(14, 2, 0));
/// ```
#[derive(Debug, Clone)]
pub struct MetadataComputer {
    analyzer: PipelineAnalyzer,
    line: usize,
    tracker: MisspellingTracker,
}

impl MetadataComputer {
    /// Start a session at line 1 with no recorded misspellings.
    pub fn new() -> Self {
        MetadataComputer {
            analyzer: PipelineAnalyzer::word_analyzer(),
            line: 1,
            tracker: MisspellingTracker::new(),
        }
    }

    /// Analyze the next line of the document.
    ///
    /// Every qualifying word absent from `dictionary` counts as a mistake and
    /// is recorded with the current line number unless already tracked. The
    /// line cursor then advances by one.
    pub fn process_line(
        &mut self,
        raw_line: &str,
        dictionary: &Dictionary,
        stop_words: &StopWords,
    ) -> Metadata {
        let characters = count_characters(raw_line);

        let mut words = 0;
        let mut mistakes = 0;
        for token in self
            .analyzer
            .analyze(raw_line)
            .filter(|token| !stop_words.contains(&token.text))
        {
            words += 1;
            if !dictionary.contains(&token.text) {
                mistakes += 1;
                self.tracker.record_if_absent(&token.text, self.line);
            }
        }

        log::trace!(
            "line {}: {characters} characters, {words} words, {mistakes} mistakes",
            self.line
        );
        self.line += 1;

        Metadata {
            characters,
            words,
            mistakes,
        }
    }

    /// The number the next processed line will get.
    pub fn current_line(&self) -> usize {
        self.line
    }

    /// Misspellings recorded so far.
    pub fn tracker(&self) -> &MisspellingTracker {
        &self.tracker
    }

    /// Return to line 1 and forget all misspellings.
    pub fn reset(&mut self) {
        self.line = 1;
        self.tracker.clear();
    }
}

impl Default for MetadataComputer {
    fn default() -> Self {
        Self::new()
    }
}
