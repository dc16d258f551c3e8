//! Delimited menu file reader with delimiter detection.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{DataTable, SourceMetadata};
use crate::error::{BrigadeError, Result};

/// Delimiters considered during auto-detection, in tie-break order.
const CANDIDATE_DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Lines sampled when guessing the delimiter.
const DETECTION_SAMPLE_LINES: usize = 10;

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            max_rows: None,
        }
    }
}

/// Reads header-first delimited files into a [`DataTable`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read a file and return its table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| BrigadeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let hash = format!("sha256:{:x}", Sha256::digest(&contents));
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };
        let table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        };

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format.to_string(),
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse in-memory bytes with a known delimiter.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(BrigadeError::EmptyData("No columns found".to_string()));
        }

        let width = headers.len();
        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        let mut rows = Vec::new();

        for record in reader.records().take(limit) {
            let record = record?;
            // Blank lines come through as a single empty field.
            if record.iter().all(str::is_empty) {
                continue;
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(BrigadeError::EmptyData("No data rows found".to_string()));
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

/// Guess the delimiter from the first few non-blank lines.
///
/// A candidate that splits every sampled line into the same number of fields
/// wins over one with ragged counts; among equals the higher count wins.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(DETECTION_SAMPLE_LINES)
        .collect();

    if lines.is_empty() {
        return Err(BrigadeError::EmptyData("No lines to analyze".to_string()));
    }

    let best = CANDIDATE_DELIMITERS
        .iter()
        .filter_map(|&delim| {
            let counts: Vec<usize> = lines.iter().map(|l| unquoted_count(l, delim)).collect();
            let first = counts[0];
            if first == 0 {
                return None;
            }
            let consistent = counts.iter().all(|&c| c == first);
            let score = if consistent { first * 1000 } else { first };
            Some((score, delim))
        })
        // max_by_key keeps the last maximum; reverse so earlier candidates win ties.
        .rev()
        .max_by_key(|(score, _)| *score)
        .map(|(_, delim)| delim);

    Ok(best.unwrap_or(b','))
}

/// Count delimiter occurrences outside double quotes.
fn unquoted_count(line: &str, delimiter: u8) -> usize {
    let delimiter = delimiter as char;
    let mut in_quotes = false;
    line.chars()
        .filter(|&c| {
            if c == '"' {
                in_quotes = !in_quotes;
            }
            c == delimiter && !in_quotes
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"ID,Item Name,Category\n1,Lasagna,Pasta\n2,Tiramisu,Dessert";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"ID\tItem Name\tCategory\n1\tLasagna\tPasta\n2\tTiramisu\tDessert";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted_commas() {
        let data = b"ID;Item Name;Origin\n1;Lasagna;\"Bologna, Emilia\"\n2;Cannoli;\"Palermo, Sicily\"";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_detect_delimiter_empty() {
        assert!(detect_delimiter(b"\n\n").is_err());
    }

    #[test]
    fn test_parse_pads_short_rows_and_skips_blank_lines() {
        let parser = Parser::new();
        let data = b"ID,Item Name,Category\n1,Lasagna\n\n2,Tiramisu,Dessert\n";
        let table = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 2), Some(""));
        assert_eq!(table.get(1, 1), Some("Tiramisu"));
    }

    #[test]
    fn test_parse_respects_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..ParserConfig::default()
        });
        let table = parser
            .parse_bytes(b"ID,Item Name\n1,Lasagna\n2,Calzone\n", b',')
            .unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        let parser = Parser::new();
        let err = parser.parse_bytes(b"ID,Item Name\n", b',').unwrap_err();
        assert!(matches!(err, BrigadeError::EmptyData(_)));
    }
}
