use thiserror::Error;

use crate::{Path, ValueKind};

/// Errors that can occur while replacing a value at a path.
///
/// ```
/// # use jsonset_core::{set_value_with_options, ConflictPolicy, Path, SetOptions};
/// # use serde_json::json;
/// let options = SetOptions::default().with_conflict_policy(ConflictPolicy::Fail);
/// let path = Path::from_json_str(r#"["a","b"]"#)?;
/// let err = set_value_with_options(&json!({"a": 1}), &path, json!(2), &options).unwrap_err();
/// assert_eq!(err.to_string(), r#"found number at $["a"]: expected JSON object"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetError {
    /// A populated slot holds a value that cannot be indexed by the next segment.
    #[error("found {found} at {path}: expected JSON {expected}")]
    TypeConflict {
        /// Location of the conflicting slot.
        path: Path,
        /// Container kind required by the next path segment.
        expected: ValueKind,
        /// Kind of the value currently stored in the slot.
        found: ValueKind,
    },
    /// An array index lies past the end of the array.
    #[error("index {index} out of bounds at {path}: array has length {len}")]
    IndexOutOfBounds {
        /// Location of the array being indexed.
        path: Path,
        /// The requested index.
        index: usize,
        /// Length of the array at the time of the write.
        len: usize,
    },
}

/// Errors emitted by [`apply_edit`](crate::apply_edit).
///
/// No partial result is produced for any variant; the caller keeps its
/// previous document.
#[derive(Debug, Error)]
pub enum EditError {
    /// The edited value text was not valid JSON.
    #[error("invalid JSON value: {0}")]
    InvalidValue(#[source] serde_json::Error),
    /// The current document text was not valid JSON.
    #[error("invalid JSON document: {0}")]
    InvalidDocument(#[source] serde_json::Error),
    /// The value could not be written at the requested path.
    #[error(transparent)]
    Set(#[from] SetError),
    /// The updated document could not be encoded.
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}
