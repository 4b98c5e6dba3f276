use serde_json::Value;

use crate::{Path, PathSegment};

/// Resolves `path` inside `document` without modifying it.
///
/// Keys descend into objects and indices into arrays; an index applied to an
/// object looks up its decimal text, mirroring [`set_value`](crate::set_value).
/// Returns `None` when a step is missing or lands on the wrong kind.
///
/// ```
/// # use jsonset_core::{lookup, Path};
/// # use serde_json::json;
/// let document = json!({"customer": [{"name": "Ada"}]});
/// let path = Path::from_json_str(r#"["customer", 0, "name"]"#)?;
/// assert_eq!(lookup(&document, &path), Some(&json!("Ada")));
/// assert_eq!(lookup(&document, &Path::new()), Some(&document));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn lookup<'a>(document: &'a Value, path: &Path) -> Option<&'a Value> {
    path.segments().iter().try_fold(document, |node, segment| match (node, segment) {
        (Value::Object(map), segment) => map.get(segment.as_object_key().as_ref()),
        (Value::Array(items), PathSegment::Index(index)) => items.get(*index),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(raw: &str) -> Path {
        Path::from_json_str(raw).unwrap()
    }

    #[test]
    fn missing_key_resolves_to_none() {
        assert_eq!(lookup(&json!({"a": 1}), &path(r#"["b"]"#)), None);
    }

    #[test]
    fn index_past_end_resolves_to_none() {
        assert_eq!(lookup(&json!([1]), &path("[1]")), None);
    }

    #[test]
    fn key_on_array_resolves_to_none() {
        assert_eq!(lookup(&json!([1]), &path(r#"["0"]"#)), None);
    }

    #[test]
    fn descending_through_scalar_resolves_to_none() {
        assert_eq!(lookup(&json!({"a": 1}), &path(r#"["a", "b"]"#)), None);
    }

    #[test]
    fn index_on_object_uses_decimal_key() {
        assert_eq!(lookup(&json!({"2": true}), &path("[2]")), Some(&json!(true)));
    }
}
