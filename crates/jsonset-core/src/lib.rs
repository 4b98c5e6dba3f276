//! Path-addressed editing of JSON documents.
//!
//! `jsonset-core` replaces the value at a path of object keys and array
//! indices, creating missing containers along the way, and projects a node's
//! display rows into an editable JSON value. Every operation is pure: inputs
//! are borrowed or consumed and a fresh value is returned.
//!
//! ```
//! use jsonset_core::{normalize_to_text, rows_of, set_value, lookup, Path};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = json!({"customer": [{"name": "Ada", "age": 36}]});
//!     let path = Path::from_json_str(r#"["customer", 0, "name"]"#)?;
//!     assert_eq!(path.to_string(), r#"$["customer"][0]["name"]"#);
//!
//!     let updated = set_value(&document, &path, json!("Grace"))?;
//!     assert_eq!(lookup(&updated, &path), Some(&json!("Grace")));
//!
//!     let node = Path::from_json_str(r#"["customer", 0]"#)?;
//!     let shown = normalize_to_text(&rows_of(lookup(&updated, &node).unwrap()));
//!     assert!(shown.contains("\"age\": 36"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod edit;
mod error;
mod kind;
mod lookup;
mod mutate;
mod options;
mod path;
mod rows;

pub use edit::{apply_edit, EditOutcome};
pub use error::{EditError, SetError};
pub use kind::ValueKind;
pub use lookup::lookup;
pub use mutate::{set_value, set_value_owned, set_value_with_options, MAX_PADDING};
pub use options::{ConflictPolicy, IndexPolicy, SetOptions};
pub use path::{format_path, Path, PathSegment};
pub use rows::{normalize, normalize_to_text, rows_of, Row};

/// Returns the semantic version of the `jsonset-core` crate.
///
/// ```
/// assert!(!jsonset_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
