//! Benchmark inputs for `jsonset-core`.
//!
//! Documents are generated deterministically so runs are comparable across
//! machines.
//!
//! # Examples
//!
//! ```
//! let doc = jsonset_benches::wide_document(3, 2);
//! assert_eq!(doc["items"].as_array().map(Vec::len), Some(3));
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use jsonset_core::{Path, PathSegment, Row};
use serde_json::{json, Map, Value};

/// Builds `{"items": [...]}` with `width` records of `fields` scalar fields
/// each, plus a nested `meta` object per record.
#[must_use]
pub fn wide_document(width: usize, fields: usize) -> Value {
    let items = (0..width)
        .map(|i| {
            let mut record = Map::new();
            for f in 0..fields {
                record.insert(format!("field{f}"), json!(i * fields + f));
            }
            record.insert("meta".to_owned(), json!({"id": i, "tags": ["a", "b"]}));
            Value::Object(record)
        })
        .collect();
    json!({ "items": Value::Array(items) })
}

/// Path alternating keys and zero indices, `depth` segments long.
///
/// ```
/// let path = jsonset_benches::deep_path(4);
/// assert_eq!(path.to_string(), r#"$["k0"][0]["k2"][0]"#);
/// ```
#[must_use]
pub fn deep_path(depth: usize) -> Path {
    (0..depth)
        .map(|i| if i % 2 == 0 { PathSegment::key(format!("k{i}")) } else { PathSegment::index(0) })
        .collect()
}

/// `count` rows mixing scalars with container rows that normalization skips.
#[must_use]
pub fn mixed_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| match i % 3 {
            0 => Row::new(Some(format!("n{i}")), json!(i)),
            1 => Row::new(Some(format!("s{i}")), json!(format!("value {i}"))),
            _ => Row::new(Some(format!("l{i}")), json!([])),
        })
        .collect()
}
