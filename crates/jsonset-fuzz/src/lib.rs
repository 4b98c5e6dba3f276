//! Fuzzing harnesses for `jsonset-core`.
//!
//! Each public function accepts raw bytes, builds documents, paths and rows
//! from them, and asserts the invariants that must hold for every input:
//! the input document is never modified, a successful write can be read back
//! at its path, and re-applying the same write is a no-op.
//!
//! ```
//! jsonset_fuzz::fuzz_set_value(b"{\"a\":1}");
//! jsonset_fuzz::fuzz_edit_text(b"[1,2]");
//! jsonset_fuzz::fuzz_normalize(&[1, 2, 3, 4]);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use jsonset_core::{
    apply_edit, lookup, normalize, set_value_with_options, ConflictPolicy, IndexPolicy, Path,
    PathSegment, Row, SetOptions, ValueKind,
};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

const MAX_DEPTH: usize = 4;
const MAX_ARRAY_LEN: u8 = 6;
const MAX_OBJECT_LEN: u8 = 6;
const MAX_STRING_LEN: u8 = 12;
const MAX_PATH_LEN: u8 = 6;
const MAX_INDEX: usize = 8;
const MAX_ROWS: u8 = 8;

/// Applies a random write to a random document and checks the core
/// invariants.
///
/// ```
/// jsonset_fuzz::fuzz_set_value(b"seed");
/// ```
pub fn fuzz_set_value(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Ok(document) = json_value_from_unstructured(&mut unstructured, 0) else {
        return;
    };
    let Ok(path) = random_path(&mut unstructured) else {
        return;
    };
    let Ok(value) = json_value_from_unstructured(&mut unstructured, 0) else {
        return;
    };
    let Ok(options) = random_options(&mut unstructured) else {
        return;
    };

    let snapshot = document.clone();
    let result = set_value_with_options(&document, &path, value.clone(), &options);
    assert_eq!(document, snapshot, "input document was modified");

    let Ok(updated) = result else {
        return;
    };
    assert_eq!(lookup(&updated, &path), Some(&value), "value not found at {path}");
    let again = set_value_with_options(&updated, &path, value, &options)
        .expect("re-applying a successful write must succeed");
    assert_eq!(again, updated, "re-applying a write changed the document");
}

/// Feeds arbitrary bytes through the text-level edit flow.
///
/// The bytes are tried both as the document and as the replacement value so
/// that parse failures on either side are exercised.
///
/// ```
/// jsonset_fuzz::fuzz_edit_text(b"{\"key\":\"value\"}");
/// ```
pub fn fuzz_edit_text(data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let root = Path::new();
    let nested = Path::from(vec![PathSegment::key("k"), PathSegment::index(0)]);
    let options = SetOptions::default();
    let _ = apply_edit(text, &root, "null", &options);
    let _ = apply_edit("{}", &nested, text, &options);
    if let Ok(outcome) = apply_edit(text, &root, text, &options) {
        assert!(!outcome.has_changes, "replacing a document with itself reported changes");
    }
}

/// Normalizes a random row list; normalization must never panic and must
/// only produce objects unless a single keyless scalar row is given.
///
/// ```
/// jsonset_fuzz::fuzz_normalize(b"rows");
/// ```
pub fn fuzz_normalize(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Ok(rows) = random_rows(&mut unstructured) else {
        return;
    };
    let normalized = normalize(&rows);
    let unwrapped =
        rows.len() == 1 && rows[0].field_key().is_none() && !rows[0].kind.is_container();
    if !unwrapped {
        assert!(normalized.is_object(), "expected an object, got {normalized}");
    }
}

fn random_options(unstructured: &mut Unstructured<'_>) -> Result<SetOptions, arbitrary::Error> {
    let conflict =
        if unstructured.arbitrary()? { ConflictPolicy::Fail } else { ConflictPolicy::Coerce };
    let index = if unstructured.arbitrary()? { IndexPolicy::PadWithNull } else { IndexPolicy::Append };
    Ok(SetOptions::default().with_conflict_policy(conflict).with_index_policy(index))
}

fn random_path(unstructured: &mut Unstructured<'_>) -> Result<Path, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_PATH_LEN)?);
    let mut path = Path::new();
    for _ in 0..len {
        if unstructured.arbitrary()? {
            path.push(PathSegment::index(unstructured.int_in_range(0..=MAX_INDEX)?));
        } else {
            path.push(PathSegment::key(random_string(unstructured)?));
        }
    }
    Ok(path)
}

fn random_rows(unstructured: &mut Unstructured<'_>) -> Result<Vec<Row>, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_ROWS)?);
    let mut rows = Vec::with_capacity(len);
    for _ in 0..len {
        let key = if unstructured.arbitrary()? { Some(random_string(unstructured)?) } else { None };
        let value = json_leaf(unstructured)?;
        let mut row = Row::new(key, value);
        if unstructured.ratio(1, 4)? {
            row.kind = if unstructured.arbitrary()? { ValueKind::Array } else { ValueKind::Object };
        }
        rows.push(row);
    }
    Ok(rows)
}

fn json_value_from_unstructured(
    unstructured: &mut Unstructured<'_>,
    depth: usize,
) -> Result<JsonValue, arbitrary::Error> {
    if depth >= MAX_DEPTH {
        return json_leaf(unstructured);
    }

    let choice = unstructured.int_in_range::<u8>(0..=5)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        3 => Ok(JsonValue::String(random_string(unstructured)?)),
        4 => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_ARRAY_LEN)?);
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(json_value_from_unstructured(unstructured, depth + 1)?);
            }
            Ok(JsonValue::Array(items))
        }
        _ => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_OBJECT_LEN)?);
            let mut map = JsonMap::new();
            for _ in 0..len {
                let key = random_string(unstructured)?;
                let value = json_value_from_unstructured(unstructured, depth + 1)?;
                map.insert(key, value);
            }
            Ok(JsonValue::Object(map))
        }
    }
}

fn json_leaf(unstructured: &mut Unstructured<'_>) -> Result<JsonValue, arbitrary::Error> {
    let choice = unstructured.int_in_range::<u8>(0..=3)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        _ => Ok(JsonValue::String(random_string(unstructured)?)),
    }
}

fn random_number(unstructured: &mut Unstructured<'_>) -> Result<JsonNumber, arbitrary::Error> {
    if unstructured.arbitrary()? {
        let int = unstructured.arbitrary::<i64>()?;
        Ok(JsonNumber::from(int))
    } else {
        let numerator = unstructured.arbitrary::<i32>()? as f64;
        let denominator = f64::from(unstructured.int_in_range::<u16>(1..=1024)?);
        JsonNumber::from_f64(numerator / denominator).ok_or(arbitrary::Error::IncorrectFormat)
    }
}

// Digits are overrepresented so keys collide with decimal indices.
fn random_string(unstructured: &mut Unstructured<'_>) -> Result<String, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_STRING_LEN)?);
    let mut string = String::with_capacity(len);
    for _ in 0..len {
        if unstructured.ratio(1, 3)? {
            string.push(char::from(unstructured.int_in_range::<u8>(b'0'..=b'9')?));
        } else {
            string.push(char::from(unstructured.int_in_range::<u8>(0x20..=0x7e)?));
        }
    }
    Ok(string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_harness_runs() {
        fuzz_set_value(b"set value");
        fuzz_set_value(&[5, 0, 3, 1, 0, 1, 2, 9, 9, 9]);
    }

    #[test]
    fn edit_text_harness_runs() {
        fuzz_edit_text(br#"{"a":[1,2]}"#);
        fuzz_edit_text(b"{");
        fuzz_edit_text(&[0xff, 0xfe]);
    }

    #[test]
    fn normalize_harness_runs() {
        fuzz_normalize(b"normalize");
        fuzz_normalize(&[]);
    }
}
