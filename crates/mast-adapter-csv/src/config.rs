//! CSV decoding options

use crate::errors::{CsvError, CsvResult};

/// Configuration for decoding CSV response bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    /// Field delimiter character (default: comma)
    pub delimiter: char,
    /// Quote character (default: double quote)
    pub quote_char: char,
    /// Trim surrounding whitespace from headers and cells (default: false)
    pub trim: bool,
    /// Cell contents decoded as null (default: the empty string)
    pub null_values: Vec<String>,
    /// Data rows to discard right after the header, e.g. a row of column types (default: 0)
    pub skip_after_header: usize,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote_char: '"',
            trim: false,
            null_values: vec![String::new()],
            skip_after_header: 0,
        }
    }
}

impl CsvConfig {
    /// Create a new configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter character
    #[must_use]
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    #[must_use]
    pub fn quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }

    /// Trim whitespace around headers and cells
    #[must_use]
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Add a cell spelling that decodes to null
    #[must_use]
    pub fn null_value(mut self, value: impl Into<String>) -> Self {
        self.null_values.push(value.into());
        self
    }

    /// Replace the set of null spellings; an empty list keeps every cell as text
    #[must_use]
    pub fn null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Discard this many data rows after the header
    #[must_use]
    pub fn skip_after_header(mut self, rows: usize) -> Self {
        self.skip_after_header = rows;
        self
    }

    /// Whether a cell's contents decode to null
    #[must_use]
    pub fn is_null(&self, cell: &str) -> bool {
        self.null_values.iter().any(|null| null == cell)
    }

    /// Check that delimiter and quote are distinct single-byte characters
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::Config`] describing the problem.
    pub fn validate(&self) -> CsvResult<()> {
        if !self.delimiter.is_ascii() {
            return Err(CsvError::config(format!(
                "delimiter {:?} is not an ASCII character",
                self.delimiter
            )));
        }
        if !self.quote_char.is_ascii() {
            return Err(CsvError::config(format!(
                "quote character {:?} is not an ASCII character",
                self.quote_char
            )));
        }
        if self.delimiter == self.quote_char {
            return Err(CsvError::config(
                "delimiter and quote character must differ",
            ));
        }
        Ok(())
    }
}
