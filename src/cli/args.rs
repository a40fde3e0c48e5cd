//! Command line argument parsing for the Lexispell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::ReportFormat;

/// Lexispell - a bigram similarity spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "lexispell")]
#[command(about = "Check spelling and suggest corrections by character-bigram similarity")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lexispell Contributors")]
#[command(long_about = None)]
pub struct LexispellArgs {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format; overrides the configuration file
    #[arg(short = 'f', long = "format")]
    pub output_format: Option<ReportFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXISPELL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexispellArgs {
    /// Get the effective verbosity level (0=errors, 1=warnings, 2=info, 3+=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check a text and print the full report
    Check(CheckArgs),

    /// Suggest corrections for individual words
    Suggest(SuggestArgs),

    /// Print the characters, words and spelling issues of a text
    Metadata(MetadataArgs),
}

/// Arguments for checking a text
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text file to check, or - for standard input
    #[arg(value_name = "TEXT")]
    pub text: PathBuf,

    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Stop word file, one word per line
    #[arg(short, long, value_name = "STOPWORDS")]
    pub stopwords: Option<PathBuf>,

    /// Suggestions per misspelled word
    #[arg(short = 'n', long)]
    pub suggestions: Option<usize>,

    /// Write the report to this file instead of standard output
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Arguments for ranking suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Words to find suggestions for
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Suggestions per word
    #[arg(short = 'n', long)]
    pub suggestions: Option<usize>,
}

/// Arguments for computing metadata
#[derive(Parser, Debug, Clone)]
pub struct MetadataArgs {
    /// Text file to analyze, or - for standard input
    #[arg(value_name = "TEXT")]
    pub text: PathBuf,

    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Stop word file, one word per line
    #[arg(short, long, value_name = "STOPWORDS")]
    pub stopwords: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_command() {
        let args = LexispellArgs::try_parse_from([
            "lexispell",
            "check",
            "essay.txt",
            "-d",
            "words.txt",
            "--stopwords",
            "stop.txt",
            "-n",
            "3",
            "-o",
            "report.txt",
        ])
        .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.text, PathBuf::from("essay.txt"));
            assert_eq!(check_args.dictionary, Some(PathBuf::from("words.txt")));
            assert_eq!(check_args.stopwords, Some(PathBuf::from("stop.txt")));
            assert_eq!(check_args.suggestions, Some(3));
            assert_eq!(check_args.output, Some(PathBuf::from("report.txt")));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_suggest_command() {
        let args = LexispellArgs::try_parse_from([
            "lexispell",
            "suggest",
            "catd",
            "dgo",
            "-d",
            "words.txt",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.words, ["catd", "dgo"]);
            assert_eq!(suggest_args.suggestions, None);
        } else {
            panic!("Expected Suggest command");
        }

        assert!(LexispellArgs::try_parse_from(["lexispell", "suggest"]).is_err());
    }

    #[test]
    fn test_metadata_from_stdin() {
        let args = LexispellArgs::try_parse_from(["lexispell", "metadata", "-"]).unwrap();

        if let Command::Metadata(metadata_args) = args.command {
            assert_eq!(metadata_args.text, PathBuf::from("-"));
            assert_eq!(metadata_args.dictionary, None);
        } else {
            panic!("Expected Metadata command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = LexispellArgs::try_parse_from(["lexispell", "metadata", "-"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = LexispellArgs::try_parse_from(["lexispell", "-v", "metadata", "-"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = LexispellArgs::try_parse_from(["lexispell", "-vvv", "metadata", "-"]).unwrap();
        assert_eq!(args.verbosity(), 4);

        // Quiet flag
        let args =
            LexispellArgs::try_parse_from(["lexispell", "-v", "--quiet", "metadata", "-"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = LexispellArgs::try_parse_from([
            "lexispell",
            "--format",
            "json",
            "--pretty",
            "metadata",
            "-",
        ])
        .unwrap();
        assert_eq!(args.output_format, Some(ReportFormat::Json));
        assert!(args.pretty);

        let unknown = ["lexispell", "--format", "yaml", "metadata", "-"];
        assert!(LexispellArgs::try_parse_from(unknown).is_err());
    }
}
