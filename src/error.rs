//! Error types for mining and dataset loading.

use std::io;

use thiserror::Error;

/// Errors surfaced by the mining entry points and the transaction reader.
#[derive(Error, Debug)]
pub enum MiningError {
    /// A support or confidence threshold outside (0, 1].
    #[error("{name} must be in range (0,1], got {value}")]
    InvalidThreshold {
        /// Which threshold was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Failure reading a dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed dataset record.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending record.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
}

/// Result type for mining operations.
pub type Result<T> = std::result::Result<T, MiningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_threshold() {
        let err = MiningError::InvalidThreshold {
            name: "Minimum support",
            value: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "Minimum support must be in range (0,1], got 1.5"
        );
    }

    #[test]
    fn test_error_display_parse() {
        let err = MiningError::Parse {
            line: 3,
            message: "unterminated quote".to_string(),
        };
        assert_eq!(err.to_string(), "Parse error on line 3: unterminated quote");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.csv");
        let err: MiningError = io_err.into();
        assert!(matches!(err, MiningError::Io(_)));
    }
}
