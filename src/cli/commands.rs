//! Command implementations for the Lexispell CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::args::*;
use crate::analysis::normalize_word;
use crate::cli::output::*;
use crate::config::SpellCheckConfig;
use crate::error::{LexispellError, Result};
use crate::spelling::{Dictionary, SpellChecker, SuggestionRanker};

/// Path argument meaning standard input.
const STDIN_PATH: &str = "-";

/// Execute a CLI command.
pub fn execute_command(args: LexispellArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_text(check_args, &args),
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &args),
        Command::Metadata(metadata_args) => show_metadata(metadata_args, &args),
    }
}

/// Load the configuration file, if any, and apply command line overrides.
pub fn resolve_config(
    cli_args: &LexispellArgs,
    dictionary: Option<&PathBuf>,
    stopwords: Option<&PathBuf>,
    suggestions: Option<usize>,
) -> Result<SpellCheckConfig> {
    let mut config = match &cli_args.config {
        Some(path) => SpellCheckConfig::from_file(path)?,
        None => SpellCheckConfig::default(),
    };

    if let Some(path) = dictionary {
        config.dictionary_path = Some(path.clone());
    }
    if let Some(path) = stopwords {
        config.stopwords_path = Some(path.clone());
    }
    if let Some(n) = suggestions {
        config.suggestions = n;
    }
    if let Some(format) = cli_args.output_format {
        config.format = format;
    }

    config.validate()?;
    Ok(config)
}

/// Open a text file, or standard input for `-`.
fn open_text(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path)
        .map_err(|e| LexispellError::source_unavailable(path.display().to_string(), e))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Check a text and write the full report.
fn check_text(args: &CheckArgs, cli_args: &LexispellArgs) -> Result<()> {
    let config = resolve_config(
        cli_args,
        args.dictionary.as_ref(),
        args.stopwords.as_ref(),
        args.suggestions,
    )?;
    let checker = SpellChecker::from_config(&config)?;

    let start_time = Instant::now();
    let report = checker.check(open_text(&args.text)?, config.suggestions)?;
    log::info!(
        "checked {} in {:?}: {} spelling issues",
        args.text.display(),
        start_time.elapsed(),
        report.metadata.mistakes
    );

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            report.write(&mut writer, config.format, cli_args.pretty)
        }
        None => report.write(&mut io::stdout().lock(), config.format, cli_args.pretty),
    }
}

/// Rank suggestions for each word on the command line.
fn suggest_words(args: &SuggestArgs, cli_args: &LexispellArgs) -> Result<()> {
    let config = resolve_config(cli_args, args.dictionary.as_ref(), None, args.suggestions)?;
    let dictionary_path = config
        .dictionary_path
        .as_ref()
        .ok_or_else(|| LexispellError::config("a dictionary path is required"))?;
    let dictionary = Dictionary::from_file(dictionary_path)?;
    let ranker =
        SuggestionRanker::new(&dictionary).with_parallel_threshold(config.parallel_threshold);

    let results = rank_words(&ranker, &args.words, config.suggestions);
    output_suggestions(&mut io::stdout().lock(), &results, config.format, cli_args.pretty)
}

/// Rank up to `n` suggestions for every word.
///
/// Words are normalized like dictionary entries first. A word that cannot be
/// queried is kept in the output with no suggestions.
pub fn rank_words<I, S>(ranker: &SuggestionRanker<'_>, words: I, n: usize) -> Vec<SuggestionResults>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| {
            let word = word.as_ref();
            let ranked = match normalize_word(word) {
                Some(normalized) => ranker.rank(&normalized, n),
                None => Err(LexispellError::invalid_word(word)),
            };
            let suggestions = ranked.unwrap_or_else(|e| {
                log::warn!("no suggestions for {word:?}: {e}");
                Vec::new()
            });
            SuggestionResults {
                word: word.to_string(),
                suggestions,
            }
        })
        .collect()
}

/// Compute the cumulative metadata of a text.
fn show_metadata(args: &MetadataArgs, cli_args: &LexispellArgs) -> Result<()> {
    let config = resolve_config(
        cli_args,
        args.dictionary.as_ref(),
        args.stopwords.as_ref(),
        None,
    )?;
    let checker = SpellChecker::from_config(&config)?;
    let metadata = checker.metadata(open_text(&args.text)?)?;

    output_metadata(&mut io::stdout().lock(), &metadata, config.format, cli_args.pretty)
}
