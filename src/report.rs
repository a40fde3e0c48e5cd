//! Spell check reports and their text and JSON renderings.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::metadata::Metadata;

/// Header written before the document metadata.
pub const METADATA_HEADER: &str = "= = = Metadata = = =";

/// Header written before the findings.
pub const FINDINGS_HEADER: &str = "= = = Findings = = =";

/// How a report is rendered.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// The line-oriented text layout
    #[default]
    Text,
    /// The whole report as a JSON object
    Json,
}

/// A misspelled word, where it first appeared, and what to replace it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub line: usize,
    pub word: String,
    pub suggestions: Vec<String>,
}

impl Finding {
    /// Render as `Line #<line>, {<word>} - Possible suggestions are {<s1>, <s2>}`.
    pub fn to_text(&self) -> String {
        format!(
            "Line #{}, {{{}}} - Possible suggestions are {{{}}}",
            self.line,
            self.word,
            self.suggestions.join(", ")
        )
    }
}

/// The outcome of checking one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The document, one entry per line, unchanged.
    pub lines: Vec<String>,
    /// Cumulative metadata of all lines.
    pub metadata: Metadata,
    /// One entry per distinct misspelled word, ordered by line, then word.
    pub findings: Vec<Finding>,
}

impl Report {
    /// Check if the document had no spelling issues.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Write the report in `format`. `pretty` only affects JSON.
    pub fn write<W: Write>(
        &self,
        writer: &mut W,
        format: ReportFormat,
        pretty: bool,
    ) -> Result<()> {
        match format {
            ReportFormat::Text => self.write_text(writer),
            ReportFormat::Json => self.write_json(writer, pretty),
        }
    }

    /// Echo the document, then the metadata and findings sections.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }

        writeln!(writer, "{METADATA_HEADER}")?;
        writeln!(
            writer,
            "{} characters, {} words, {} spelling issues(s) found",
            self.metadata.characters, self.metadata.words, self.metadata.mistakes
        )?;

        writeln!(writer, "{FINDINGS_HEADER}")?;
        for finding in &self.findings {
            writeln!(writer, "{}", finding.to_text())?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Serialize the report as a single JSON document.
    pub fn write_json<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, self)?;
        } else {
            serde_json::to_writer(&mut *writer, self)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            lines: vec!["i am a catd!".to_string()],
            metadata: Metadata::new(9, 1, 1),
            findings: vec![Finding {
                line: 1,
                word: "catd".to_string(),
                suggestions: vec!["cat".to_string(), "cats".to_string()],
            }],
        }
    }

    #[test]
    fn test_text_layout() {
        let mut out = Vec::new();
        sample().write_text(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "i am a catd!",
                "= = = Metadata = = =",
                "9 characters, 1 words, 1 spelling issues(s) found",
                "= = = Findings = = =",
                "Line #1, {catd} - Possible suggestions are {cat, cats}",
            ]
        );
    }

    #[test]
    fn test_empty_report_keeps_headers() {
        let mut out = Vec::new();
        Report::default().write_text(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "= = = Metadata = = =\n\
             0 characters, 0 words, 0 spelling issues(s) found\n\
             = = = Findings = = =\n"
        );
    }

    #[test]
    fn test_finding_without_suggestions() {
        let finding = Finding {
            line: 3,
            word: "zzz".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(finding.to_text(), "Line #3, {zzz} - Possible suggestions are {}");
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample();
        let mut out = Vec::new();
        report.write(&mut out, ReportFormat::Json, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["metadata"]["mistakes"], 1);
        assert_eq!(value["findings"][0]["suggestions"][1], "cats");

        let parsed: Report = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, report);
        assert!(!parsed.is_clean());
    }

    #[test]
    fn test_format_serde_names() {
        assert_eq!(serde_json::to_string(&ReportFormat::Json).unwrap(), "\"json\"");
        let format: ReportFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, ReportFormat::Text);
    }
}
