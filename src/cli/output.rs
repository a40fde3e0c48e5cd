//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::report::ReportFormat;
use crate::spelling::{Metadata, Suggestion};

/// Ranked suggestions for one queried word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub word: String,
    pub suggestions: Vec<Suggestion>,
}

/// Write a serializable value as JSON followed by a newline.
pub fn output_json<T: Serialize, W: Write>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write suggestion results.
///
/// The text form prints one word per line with its scored suggestions, e.g.
/// `catd: cat (0.816), cats (0.667)`.
pub fn output_suggestions<W: Write>(
    writer: &mut W,
    results: &[SuggestionResults],
    format: ReportFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        ReportFormat::Json => output_json(writer, &results, pretty),
        ReportFormat::Text => {
            for result in results {
                let ranked: Vec<String> = result
                    .suggestions
                    .iter()
                    .map(|s| format!("{} ({:.3})", s.word, s.score))
                    .collect();
                writeln!(writer, "{}: {}", result.word, ranked.join(", "))?;
            }
            writer.flush()?;
            Ok(())
        }
    }
}

/// Write document metadata.
pub fn output_metadata<W: Write>(
    writer: &mut W,
    metadata: &Metadata,
    format: ReportFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        ReportFormat::Json => output_json(writer, metadata, pretty),
        ReportFormat::Text => {
            writeln!(
                writer,
                "{} characters, {} words, {} spelling issues(s) found",
                metadata.characters, metadata.words, metadata.mistakes
            )?;
            writer.flush()?;
            Ok(())
        }
    }
}
