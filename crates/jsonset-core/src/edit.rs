//! The save step of a node edit: parse, replace, re-encode.

use serde_json::Value;
use tracing::debug;

use crate::{set_value_owned, EditError, Path, SetOptions};

/// Result of a successful [`apply_edit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    /// Updated document, encoded as 2-space indented JSON.
    pub contents: String,
    /// Whether the updated document differs from the input document.
    pub has_changes: bool,
}

/// Replaces the value at `path` inside `document_text` with the JSON parsed
/// from `value_text`.
///
/// The edited value is parsed first, so malformed input is reported without
/// touching the document. On any error the caller keeps its previous state.
///
/// ```
/// # use jsonset_core::{apply_edit, Path, SetOptions};
/// let path = Path::from_json_str(r#"["a", 1]"#)?;
/// let outcome = apply_edit(r#"{"a":[1,2,3]}"#, &path, "99", &SetOptions::default())?;
/// assert_eq!(outcome.contents, "{\n  \"a\": [\n    1,\n    99,\n    3\n  ]\n}");
/// assert!(outcome.has_changes);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn apply_edit(
    document_text: &str,
    path: &Path,
    value_text: &str,
    options: &SetOptions,
) -> Result<EditOutcome, EditError> {
    let new_value: Value = serde_json::from_str(value_text).map_err(EditError::InvalidValue)?;
    let current: Value = serde_json::from_str(document_text).map_err(EditError::InvalidDocument)?;

    let updated = set_value_owned(current.clone(), path, new_value, options)?;
    let has_changes = updated != current;
    let contents = serde_json::to_string_pretty(&updated).map_err(EditError::Encode)?;
    debug!(%path, has_changes, bytes = contents.len(), "applied edit");

    Ok(EditOutcome { contents, has_changes })
}
