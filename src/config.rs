//! Spell checker configuration.
//!
//! A configuration is a JSON object; every field is optional and falls back
//! to [`SpellCheckConfig::default`]:
//!
//! ```json
//! {
//!   "dictionary_path": "words.txt",
//!   "stopwords_path": "stopwords.txt",
//!   "suggestions": 3,
//!   "parallel_threshold": 4096,
//!   "format": "json"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LexispellError, Result};
use crate::report::ReportFormat;
use crate::spelling::suggest::DEFAULT_PARALLEL_THRESHOLD;

/// Number of suggestions listed per misspelled word unless configured.
pub const DEFAULT_SUGGESTIONS: usize = 2;

/// Settings for building a [`SpellChecker`](crate::spelling::SpellChecker)
/// and rendering its reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellCheckConfig {
    /// Word list with one dictionary entry per line. Required.
    pub dictionary_path: Option<PathBuf>,

    /// Stop word list with one entry per line.
    /// If None, the built-in English list is used.
    pub stopwords_path: Option<PathBuf>,

    /// Suggestions listed per misspelled word.
    pub suggestions: usize,

    /// Dictionary size from which ranking runs in parallel.
    pub parallel_threshold: usize,

    /// Report format.
    pub format: ReportFormat,
}

impl Default for SpellCheckConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            stopwords_path: None,
            suggestions: DEFAULT_SUGGESTIONS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            format: ReportFormat::Text,
        }
    }
}

impl SpellCheckConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LexispellError::source_unavailable(path.display().to_string(), e))?;
        let config: SpellCheckConfig = serde_json::from_str(&content)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the dictionary path.
    pub fn with_dictionary<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    /// Set the stop word path.
    pub fn with_stopwords<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.stopwords_path = Some(path.into());
        self
    }

    /// Set the number of suggestions per misspelled word.
    pub fn with_suggestions(mut self, suggestions: usize) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Check that the configuration can build a spell checker.
    pub fn validate(&self) -> Result<()> {
        match &self.dictionary_path {
            None => Err(LexispellError::config("a dictionary path is required")),
            Some(path) if path.as_os_str().is_empty() => {
                Err(LexispellError::config("the dictionary path is empty"))
            }
            Some(_) => Ok(()),
        }
    }
}
