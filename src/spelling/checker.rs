//! The spell checking engine.

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::analysis::stop::StopWords;
use crate::config::SpellCheckConfig;
use crate::error::{LexispellError, Result};
use crate::report::{Finding, Report};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::metadata::{Metadata, MetadataComputer};
use crate::spelling::suggest::{DEFAULT_PARALLEL_THRESHOLD, SuggestionRanker};

/// Checks documents against a dictionary and proposes corrections.
///
/// The dictionary and stop words are loaded once and never change. All
/// per-document state lives in a [`MetadataComputer`] session, so one checker
/// can serve many documents, including from several threads at once.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use lexispell::spelling::SpellChecker;
///
/// let checker = SpellChecker::from_readers(
///     Cursor::new("cat\ncats\ndog\nhello\n"),
///     Cursor::new("a\nam\ni\n"),
/// )
/// .unwrap();
///
/// let report = checker.check(Cursor::new("i am a catd!"), 2).unwrap();
/// assert_eq!(report.findings[0].word, "catd");
/// assert_eq!(report.findings[0].suggestions, ["cat", "cats"]);
/// ```
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Arc<Dictionary>,
    stop_words: Arc<StopWords>,
    parallel_threshold: usize,
}

impl SpellChecker {
    /// Create a checker from already built parts.
    pub fn new(dictionary: Dictionary, stop_words: StopWords) -> Self {
        SpellChecker {
            dictionary: Arc::new(dictionary),
            stop_words: Arc::new(stop_words),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Load the dictionary and stop words from line-oriented readers.
    ///
    /// Fails with [`LexispellError::SourceUnavailable`] if either source
    /// cannot be read; no checker is built from a partial source.
    pub fn from_readers<D: BufRead, S: BufRead>(dictionary: D, stop_words: S) -> Result<Self> {
        let dictionary = Dictionary::from_reader(dictionary, "dictionary")?;
        let stop_words = StopWords::from_reader(stop_words, "stopwords")?;
        Ok(Self::new(dictionary, stop_words))
    }

    /// Build a checker from a validated configuration.
    ///
    /// Without a stop word path the built-in English list is used.
    pub fn from_config(config: &SpellCheckConfig) -> Result<Self> {
        config.validate()?;

        let dictionary_path = config
            .dictionary_path
            .as_ref()
            .ok_or_else(|| LexispellError::config("a dictionary path is required"))?;
        let dictionary = Dictionary::from_file(dictionary_path)?;

        let stop_words = match &config.stopwords_path {
            Some(path) => StopWords::from_file(path)?,
            None => StopWords::english(),
        };

        Ok(Self::new(dictionary, stop_words).with_parallel_threshold(config.parallel_threshold))
    }

    /// Rank on the rayon pool for dictionaries of at least `threshold` words.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// The loaded dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The loaded stop words.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// A fresh per-document session starting at line 1.
    pub fn session(&self) -> MetadataComputer {
        MetadataComputer::new()
    }

    /// Process the next line of `session`'s document.
    pub fn process_line(&self, session: &mut MetadataComputer, line: &str) -> Metadata {
        session.process_line(line, &self.dictionary, &self.stop_words)
    }

    /// The `n` dictionary words most similar to `word`, best first.
    pub fn find_closest(&self, word: &str, n: usize) -> Result<Vec<String>> {
        self.ranker().find_closest(word, n)
    }

    /// Cumulative metadata of a whole document.
    pub fn metadata<R: BufRead>(&self, reader: R) -> Result<Metadata> {
        let mut session = self.session();
        let mut total = Metadata::default();
        for line in reader.lines() {
            total += self.process_line(&mut session, &line?);
        }
        Ok(total)
    }

    /// Check a whole document and suggest up to `suggestions` corrections
    /// for each distinct misspelled word.
    ///
    /// A word whose suggestion query fails is reported with no suggestions.
    pub fn check<R: BufRead>(&self, reader: R, suggestions: usize) -> Result<Report> {
        let mut session = self.session();
        let mut lines = Vec::new();
        let mut metadata = Metadata::default();

        for line in reader.lines() {
            let line = line?;
            metadata += self.process_line(&mut session, &line);
            lines.push(line);
        }

        let ranker = self.ranker();
        let findings = session
            .tracker()
            .misspellings()
            .into_iter()
            .map(|misspelling| {
                let suggestions = ranker
                    .find_closest(&misspelling.word, suggestions)
                    .unwrap_or_else(|e| {
                        log::warn!("no suggestions for {:?}: {e}", misspelling.word);
                        Vec::new()
                    });
                Finding {
                    line: misspelling.line,
                    word: misspelling.word,
                    suggestions,
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "checked {} lines: {} characters, {} words, {} mistakes, {} distinct",
            lines.len(),
            metadata.characters,
            metadata.words,
            metadata.mistakes,
            findings.len()
        );

        Ok(Report {
            lines,
            metadata,
            findings,
        })
    }

    /// Check a document and write the text report to `output`.
    pub fn analyze<R: BufRead, W: Write>(
        &self,
        reader: R,
        output: &mut W,
        suggestions: usize,
    ) -> Result<()> {
        self.check(reader, suggestions)?.write_text(output)
    }

    fn ranker(&self) -> SuggestionRanker<'_> {
        SuggestionRanker::new(&self.dictionary).with_parallel_threshold(self.parallel_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::thread;

    fn checker() -> SpellChecker {
        SpellChecker::from_readers(
            Cursor::new("cat\ncats\ndog\nbird\ncatalog\nhello\ncart\n"),
            Cursor::new("a\nam\ni\n"),
        )
        .unwrap()
    }

    #[test]
    fn test_metadata() {
        let checker = checker();
        let metadata = checker.metadata(Cursor::new("hello, i am a cat!")).unwrap();
        assert_eq!(metadata, Metadata::new(14, 2, 0));
    }

    #[test]
    fn test_metadata_is_cumulative() {
        let checker = checker();
        let metadata = checker
            .metadata(Cursor::new("i am a catd!\nthe dog\n\nbirdd"))
            .unwrap();
        // "the" is not a stop word here.
        assert_eq!(metadata, Metadata::new(9 + 6 + 5, 4, 3));
    }

    #[test]
    fn test_empty_document() {
        let checker = checker();
        assert_eq!(checker.metadata(Cursor::new("")).unwrap(), Metadata::default());

        let report = checker.check(Cursor::new(""), 2).unwrap();
        assert!(report.lines.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_check_reports_first_line() {
        let checker = checker();
        let report = checker
            .check(Cursor::new("hello dogg\ncatd\ndogg again"), 1)
            .unwrap();

        let found: Vec<(usize, &str)> = report
            .findings
            .iter()
            .map(|f| (f.line, f.word.as_str()))
            .collect();
        assert_eq!(found, [(1, "dogg"), (2, "catd"), (3, "again")]);
        assert_eq!(report.metadata.mistakes, 4);
        assert_eq!(report.findings[0].suggestions, ["dog"]);
    }

    #[test]
    fn test_sessions_are_independent() {
        let checker = checker();
        let first = checker.check(Cursor::new("\ncatd"), 2).unwrap();
        let second = checker.check(Cursor::new("catd"), 2).unwrap();

        assert_eq!(first.findings[0].line, 2);
        assert_eq!(second.findings[0].line, 1);
    }

    #[test]
    fn test_analyze_writes_text_report() {
        let checker = checker();
        let mut out = Vec::new();
        checker.analyze(Cursor::new("i am a catd!"), &mut out, 2).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "i am a catd!\n\
             = = = Metadata = = =\n\
             9 characters, 1 words, 1 spelling issues(s) found\n\
             = = = Findings = = =\n\
             Line #1, {catd} - Possible suggestions are {cat, cats}\n"
        );
    }

    #[test]
    fn test_find_closest() {
        let checker = checker();
        assert_eq!(checker.find_closest("catd", 2).unwrap(), ["cat", "cats"]);
        assert!(checker.find_closest("c", 2).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let checker = Arc::new(checker());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let checker = Arc::clone(&checker);
                thread::spawn(move || checker.check(Cursor::new("catd dgo"), 2).unwrap())
            })
            .collect();

        let reports: Vec<Report> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for report in &reports[1..] {
            assert_eq!(report, &reports[0]);
        }
    }

    #[test]
    fn test_from_config_requires_dictionary() {
        let result = SpellChecker::from_config(&SpellCheckConfig::default());
        assert!(matches!(result, Err(LexispellError::Config(_))));
    }
}
