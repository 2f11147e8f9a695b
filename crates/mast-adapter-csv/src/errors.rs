//! Error types for CSV decoding with line context

use thiserror::Error;

/// Whether a row length mismatch is due to missing or extra columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLengthMismatchKind {
    Missing,
    Extra,
}

impl std::fmt::Display for RowLengthMismatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "missing values"),
            Self::Extra => write!(f, "extra values"),
        }
    }
}

/// Errors that can occur when decoding CSV
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// CSV read error with context
    #[error("CSV read error at line {line}: {message}")]
    Read { line: usize, message: String },

    /// Missing or unusable header row
    #[error("Header error: {0}")]
    Header(String),

    /// Row-length mismatch against the header width
    #[error(
        "Row length mismatch at line {line}: expected {expected} columns, got {actual} ({kind})"
    )]
    RowLengthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
        kind: RowLengthMismatchKind,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CsvError {
    /// Create a read error at a specific line
    pub fn read_at(line: usize, message: impl Into<String>) -> Self {
        Self::Read {
            line,
            message: message.into(),
        }
    }

    /// Create a header error
    pub fn header(message: impl Into<String>) -> Self {
        Self::Header(message.into())
    }

    /// Create a row-length mismatch error, deriving the kind from the counts.
    #[must_use]
    pub fn row_length_mismatch(line: usize, expected: usize, actual: usize) -> Self {
        let kind = if actual < expected {
            RowLengthMismatchKind::Missing
        } else {
            RowLengthMismatchKind::Extra
        };
        Self::RowLengthMismatch {
            line,
            expected,
            actual,
            kind,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get the line number if available
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Read { line, .. } | Self::RowLengthMismatch { line, .. } if *line > 0 => {
                Some(*line)
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for CsvError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<csv::Error> for CsvError {
    fn from(e: csv::Error) -> Self {
        let line = e
            .position()
            .and_then(|position| usize::try_from(position.line()).ok())
            .unwrap_or(0);
        if e.is_io_error() {
            Self::Io(e.to_string())
        } else {
            Self::read_at(line, e.to_string())
        }
    }
}

/// Result type alias for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_length_mismatch_kind() {
        let missing = CsvError::row_length_mismatch(3, 4, 2);
        assert!(matches!(
            missing,
            CsvError::RowLengthMismatch {
                kind: RowLengthMismatchKind::Missing,
                ..
            }
        ));
        assert_eq!(
            missing.to_string(),
            "Row length mismatch at line 3: expected 4 columns, got 2 (missing values)"
        );

        let extra = CsvError::row_length_mismatch(5, 2, 3);
        assert!(extra.to_string().ends_with("(extra values)"));
    }

    #[test]
    fn test_line_number() {
        assert_eq!(CsvError::read_at(7, "bad").line_number(), Some(7));
        assert_eq!(CsvError::read_at(0, "bad").line_number(), None);
        assert_eq!(CsvError::row_length_mismatch(2, 1, 3).line_number(), Some(2));
        assert_eq!(CsvError::header("empty").line_number(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::other("pipe closed");
        assert_eq!(CsvError::from(io), CsvError::Io("pipe closed".into()));
    }
}
