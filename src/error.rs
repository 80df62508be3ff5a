use std::io;

use thiserror::Error;

use crate::record::ValueKind;

/// Errors raised while validating input or sorting it.
///
/// A disagreement between two sort implementations is *not* an error, the benchmark reports it
/// as part of its result instead.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("sort key must not be empty")]
    EmptyKey,
    #[error("record {index} has no field '{key}'")]
    MissingKey { index: usize, key: String },
    #[error("field '{key}' mixes {first} and {other} values, first {other} value at record {index}")]
    MixedKeyTypes {
        key: String,
        first: ValueKind,
        other: ValueKind,
        index: usize,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;
