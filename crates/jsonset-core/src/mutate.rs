//! Path-addressed replacement of values inside a JSON document.
//!
//! The walk rebuilds every container along the path and leaves everything
//! else untouched. Missing or `null` slots become containers whose kind is
//! chosen by the segment that indexes them: an array for an index, an object
//! for a key. This lets one call create arbitrarily deep structure.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{ConflictPolicy, IndexPolicy, Path, PathSegment, SetError, SetOptions, ValueKind};

/// Largest number of `null`s [`IndexPolicy::PadWithNull`] inserts in one array.
pub const MAX_PADDING: usize = 1 << 16;

/// Returns a copy of `document` with the value at `path` replaced by
/// `new_value`, using the default [`SetOptions`].
///
/// The input document is never modified. An empty path replaces the whole
/// document, whatever shape `new_value` has.
///
/// ```
/// # use jsonset_core::{set_value, Path};
/// # use serde_json::json;
/// let document = json!({});
/// let path = Path::from_json_str(r#"["a", 0, "b"]"#)?;
/// let updated = set_value(&document, &path, json!(5))?;
/// assert_eq!(updated, json!({"a": [{"b": 5}]}));
/// assert_eq!(document, json!({}));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn set_value(document: &Value, path: &Path, new_value: Value) -> Result<Value, SetError> {
    set_value_with_options(document, path, new_value, &SetOptions::default())
}

/// Like [`set_value`], honoring the conflict and index policies in `options`.
///
/// ```
/// # use jsonset_core::{set_value_with_options, IndexPolicy, Path, SetOptions};
/// # use serde_json::json;
/// let options = SetOptions::default().with_index_policy(IndexPolicy::PadWithNull);
/// let path = Path::from_json_str("[3]")?;
/// let updated = set_value_with_options(&json!([1]), &path, json!(4), &options)?;
/// assert_eq!(updated, json!([1, null, null, 4]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn set_value_with_options(
    document: &Value,
    path: &Path,
    new_value: Value,
    options: &SetOptions,
) -> Result<Value, SetError> {
    if path.is_empty() {
        return Ok(new_value);
    }
    set_value_owned(document.clone(), path, new_value, options)
}

/// Consuming variant of [`set_value_with_options`].
///
/// Values off the path are moved into the result rather than cloned.
pub fn set_value_owned(
    document: Value,
    path: &Path,
    new_value: Value,
    options: &SetOptions,
) -> Result<Value, SetError> {
    let mut path_behind = Path::new();
    set_in(document, &mut path_behind, path.segments(), new_value, options)
}

fn set_in(
    node: Value,
    path_behind: &mut Path,
    path_ahead: &[PathSegment],
    new_value: Value,
    options: &SetOptions,
) -> Result<Value, SetError> {
    let Some((segment, rest)) = path_ahead.split_first() else {
        return Ok(new_value);
    };
    trace!(path = %path_behind, %segment, "descending");

    match (node, segment) {
        (Value::Object(map), _) => set_in_object(map, path_behind, segment, rest, new_value, options),
        (Value::Array(items), PathSegment::Index(index)) => {
            set_in_array(items, path_behind, *index, rest, new_value, options)
        }
        (Value::Null, _) => {
            debug!(path = %path_behind, expected = %container_for(segment), "creating container");
            set_in_fresh(path_behind, segment, rest, new_value, options)
        }
        (other, _) => {
            let found = ValueKind::of(&other);
            let expected = container_for(segment);
            match options.conflict_policy() {
                ConflictPolicy::Fail => {
                    Err(SetError::TypeConflict { path: path_behind.clone(), expected, found })
                }
                ConflictPolicy::Coerce => {
                    debug!(path = %path_behind, %found, %expected, "coercing slot");
                    set_in_fresh(path_behind, segment, rest, new_value, options)
                }
            }
        }
    }
}

fn set_in_fresh(
    path_behind: &mut Path,
    segment: &PathSegment,
    rest: &[PathSegment],
    new_value: Value,
    options: &SetOptions,
) -> Result<Value, SetError> {
    match segment {
        PathSegment::Key(_) => {
            set_in_object(Map::new(), path_behind, segment, rest, new_value, options)
        }
        PathSegment::Index(index) => {
            set_in_array(Vec::new(), path_behind, *index, rest, new_value, options)
        }
    }
}

fn set_in_object(
    mut map: Map<String, Value>,
    path_behind: &mut Path,
    segment: &PathSegment,
    rest: &[PathSegment],
    new_value: Value,
    options: &SetOptions,
) -> Result<Value, SetError> {
    let key = segment.as_object_key().into_owned();
    // Taking the child in place keeps the key's position in the map.
    let child = map.get_mut(&key).map(std::mem::take).unwrap_or(Value::Null);

    path_behind.push(segment.clone());
    let patched = set_in(child, path_behind, rest, new_value, options);
    path_behind.pop();

    map.insert(key, patched?);
    Ok(Value::Object(map))
}

fn set_in_array(
    mut items: Vec<Value>,
    path_behind: &mut Path,
    index: usize,
    rest: &[PathSegment],
    new_value: Value,
    options: &SetOptions,
) -> Result<Value, SetError> {
    let len = items.len();
    if index > len {
        let out_of_bounds = || SetError::IndexOutOfBounds { path: path_behind.clone(), index, len };
        match options.index_policy() {
            IndexPolicy::Append => return Err(out_of_bounds()),
            IndexPolicy::PadWithNull => {
                if index - len > MAX_PADDING {
                    return Err(out_of_bounds());
                }
                items.try_reserve(index + 1 - len).map_err(|_| out_of_bounds())?;
                debug!(path = %path_behind, index, len, "padding array with nulls");
                items.resize(index, Value::Null);
            }
        }
    }
    if index == items.len() {
        items.push(Value::Null);
    }
    let child = std::mem::take(&mut items[index]);

    path_behind.push(PathSegment::Index(index));
    let patched = set_in(child, path_behind, rest, new_value, options);
    path_behind.pop();

    items[index] = patched?;
    Ok(Value::Array(items))
}

fn container_for(segment: &PathSegment) -> ValueKind {
    match segment {
        PathSegment::Key(_) => ValueKind::Object,
        PathSegment::Index(_) => ValueKind::Array,
    }
}
