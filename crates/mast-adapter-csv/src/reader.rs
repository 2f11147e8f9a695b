//! CSV reader

use crate::config::CsvConfig;
use crate::errors::{CsvError, CsvResult};
use mast_record::RawRecord;
use serde_json::Value;
use std::collections::HashSet;
use std::io::Read;
use tracing::{debug, trace};

/// Reader turning a CSV response body into raw records keyed by header name
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    config: CsvConfig,
}

impl CsvReader {
    /// Create a new CSV reader with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given configuration
    #[must_use]
    pub fn with_config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Decode all rows.
    ///
    /// Every cell becomes a JSON string, or JSON null when it matches one of
    /// the configured null spellings.
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::Config`] for an unusable configuration,
    /// [`CsvError::Header`] when the header row is missing or repeats a name,
    /// [`CsvError::RowLengthMismatch`] when a row's width differs from the
    /// header, and [`CsvError::Read`]/[`CsvError::Io`] for malformed input.
    pub fn read<R: Read>(&self, input: R) -> CsvResult<Vec<RawRecord>> {
        self.config.validate()?;

        let trim = if self.config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };
        // validate() guarantees both characters are ASCII
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(ascii_byte(self.config.delimiter))
            .quote(ascii_byte(self.config.quote_char))
            .has_headers(true)
            .flexible(true)
            .trim(trim)
            .from_reader(input);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        check_headers(&headers)?;

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row = result?;
            if index < self.config.skip_after_header {
                trace!(index, "Skipping row after header");
                continue;
            }

            let line = row
                .position()
                .and_then(|position| usize::try_from(position.line()).ok())
                .unwrap_or(index + 2);
            if row.len() != headers.len() {
                return Err(CsvError::row_length_mismatch(line, headers.len(), row.len()));
            }

            let record: RawRecord = headers
                .iter()
                .zip(row.iter())
                .map(|(name, cell)| (name.clone(), self.cell_value(cell)))
                .collect();
            trace!(line, "Read CSV row");
            records.push(record);
        }

        debug!(
            row_count = records.len(),
            column_count = headers.len(),
            "Finished reading CSV"
        );
        Ok(records)
    }

    /// Decode all rows of an in-memory body
    ///
    /// # Errors
    ///
    /// Same as [`CsvReader::read`].
    pub fn read_str(&self, body: &str) -> CsvResult<Vec<RawRecord>> {
        self.read(body.as_bytes())
    }

    fn cell_value(&self, cell: &str) -> Value {
        if self.config.is_null(cell) {
            Value::Null
        } else {
            Value::String(cell.to_string())
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn ascii_byte(c: char) -> u8 {
    c as u8
}

fn check_headers(headers: &[String]) -> CsvResult<()> {
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(CsvError::header("missing header row"));
    }
    let mut seen = HashSet::new();
    for name in headers {
        if !seen.insert(name.as_str()) {
            return Err(CsvError::header(format!("duplicate column '{name}'")));
        }
    }
    Ok(())
}
