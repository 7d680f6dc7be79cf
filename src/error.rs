use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("input file '{path}' does not exist")]
    InputNotFound { path: PathBuf },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A full block without a single line break: the block size is smaller
    /// than the longest record, or the input is not line oriented.
    #[error("no line break in a block of {len} bytes; the block size must exceed the longest record")]
    NoLineBreak { len: usize },

    #[error("record has a separator but no line break: {trailing:?}")]
    UnterminatedRecord { trailing: String },

    #[error("record has no ';' separator: {line:?}")]
    MissingSeparator { line: String },

    #[error("invalid measurement {text:?}")]
    InvalidMeasurement { text: String },
}

impl AggregateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregateError>;
