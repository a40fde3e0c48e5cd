//! Line-oriented word list ingestion.
//!
//! Dictionaries and stop word lists are plain text with one entry per line.
//! Any failure while opening or reading a list is reported as
//! [`LexispellError::SourceUnavailable`]; a partially read list is never
//! returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LexispellError, Result};

/// Read every line of `reader`. `name` identifies the source in errors.
pub fn read_word_list<R: BufRead>(reader: R, name: &str) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|e| LexispellError::source_unavailable(name, e))
}

/// Read every line of the file at `path`.
pub fn read_word_list_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| LexispellError::source_unavailable(&name, e))?;
    read_word_list(BufReader::new(file), &name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read, Write};
    use tempfile::NamedTempFile;

    /// Yields some bytes, then fails.
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk on fire"));
            }
            self.served = true;
            let data = b"cat\ndog\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_read_word_list() {
        let lines = read_word_list(Cursor::new("cat\n dog \n\nbird"), "inline").unwrap();
        assert_eq!(lines, ["cat", " dog ", "", "bird"]);
    }

    #[test]
    fn test_read_failure_is_source_unavailable() {
        let reader = BufReader::new(FailingReader { served: false });
        let error = read_word_list(reader, "broken").unwrap_err();

        match error {
            LexispellError::SourceUnavailable { name, .. } => assert_eq!(name, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_word_list_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello").unwrap();
        writeln!(temp_file, "world").unwrap();
        temp_file.flush().unwrap();

        let lines = read_word_list_file(temp_file.path()).unwrap();
        assert_eq!(lines, ["hello", "world"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let error = read_word_list_file(&path).unwrap_err();
        assert!(matches!(error, LexispellError::SourceUnavailable { .. }));
        assert!(error.to_string().contains("missing.txt"));
    }
}
