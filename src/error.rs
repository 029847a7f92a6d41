//! Error taxonomy shared by every frame operation.
//!
//! Field accessors, conversions, structural checks and IO all surface a
//! [`FrameError`] to the immediate caller. Nothing in this crate panics or
//! exits on bad input; deciding whether a failure is fatal belongs to the
//! caller.

use std::path::PathBuf;
use thiserror::Error;

#[cfg(feature = "cloud")]
use crate::io::cloud::CloudIOError;

/// Result type for frame operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised by [`DataFrame`](crate::DataFrame) operations, the CSV
/// loader and the concurrent loader.
#[derive(Debug, Error)]
pub enum FrameError {
    /// A referenced column does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// A column name would appear twice in the same frame.
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    /// A record's width does not match the frame's column count.
    #[error("record has {found} values but the frame has {expected} columns")]
    ShapeMismatch { expected: usize, found: usize },

    /// A cell could not be parsed into the requested numeric type.
    #[error("could not convert {value:?} in column {column:?} to {target}")]
    ConversionError {
        column: String,
        value: String,
        target: &'static str,
    },

    /// A date string is neither `YYYY-MM-DD` nor `M/D/Y`.
    #[error("could not parse date {value:?}: {reason}")]
    DateParseError { value: String, reason: String },

    /// Two frames being stacked have a different number of columns.
    #[error("cannot concatenate frames: {left} columns vs {right} columns")]
    ColumnCountMismatch { left: usize, right: usize },

    /// Two frames being stacked have the same width but different column order.
    #[error("cannot concatenate frames: column {position} is {left:?} on the left and {right:?} on the right")]
    ColumnOrderMismatch {
        position: usize,
        left: String,
        right: String,
    },

    /// The operation needs at least one record.
    #[error("empty frame")]
    EmptyFrame,

    /// Too few inputs were supplied.
    #[error("at least {required} files are required, got {found}")]
    InsufficientInput { required: usize, found: usize },

    /// Internal bookkeeping lost track of an expected result.
    #[error("lookup error: {0}")]
    LookupError(String),

    /// An argument is outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A single file failed while loading a batch.
    #[error("failed to load {}: {source}", file.display())]
    LoadFailed {
        file: PathBuf,
        #[source]
        source: Box<FrameError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[cfg(feature = "io-glob")]
    #[error("glob error: {0}")]
    Glob(String),

    #[cfg(feature = "cloud")]
    #[error("object storage error: {0}")]
    Cloud(#[from] CloudIOError),
}

impl FrameError {
    pub(crate) fn conversion(column: &str, value: &str, target: &'static str) -> Self {
        FrameError::ConversionError {
            column: column.to_string(),
            value: value.to_string(),
            target,
        }
    }

    pub(crate) fn date(value: &str, reason: impl Into<String>) -> Self {
        FrameError::DateParseError {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FrameError::ColumnNotFound("Weight".to_string());
        assert_eq!(err.to_string(), "column not found: Weight");

        let err = FrameError::ShapeMismatch {
            expected: 6,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "record has 3 values but the frame has 6 columns"
        );

        let err = FrameError::conversion("Cost", "12x", "f64");
        assert_eq!(
            err.to_string(),
            "could not convert \"12x\" in column \"Cost\" to f64"
        );
    }

    #[test]
    fn load_failed_keeps_source() {
        let err = FrameError::LoadFailed {
            file: PathBuf::from("data/missing.csv"),
            source: Box::new(FrameError::EmptyFrame),
        };
        assert_eq!(err.to_string(), "failed to load data/missing.csv: empty frame");
        assert!(std::error::Error::source(&err).is_some());
    }
}
