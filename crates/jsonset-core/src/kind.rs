use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of a JSON value.
///
/// Serves both as the `type` tag of a [`Row`](crate::Row) and as the kind
/// reported by [`SetError::TypeConflict`](crate::SetError::TypeConflict).
///
/// ```
/// # use jsonset_core::ValueKind;
/// # use serde_json::json;
/// assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::Array);
/// assert_eq!(ValueKind::of(&json!("text")).to_string(), "string");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Boolean,
    /// JSON number.
    Number,
    /// JSON string.
    String,
    /// JSON array.
    Array,
    /// JSON object.
    Object,
}

impl ValueKind {
    /// Classifies a JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns `true` for arrays and objects.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean => f.write_str("boolean"),
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::Array => f.write_str("array"),
            Self::Object => f.write_str("object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serde_uses_lowercase_tags() {
        let encoded = serde_json::to_string(&ValueKind::Boolean).unwrap();
        assert_eq!(encoded, "\"boolean\"");
        let decoded: ValueKind = serde_json::from_str("\"object\"").unwrap();
        assert_eq!(decoded, ValueKind::Object);
    }

    #[test]
    fn only_arrays_and_objects_are_containers() {
        assert!(ValueKind::of(&json!({})).is_container());
        assert!(ValueKind::of(&json!([])).is_container());
        assert!(!ValueKind::of(&json!(null)).is_container());
        assert!(!ValueKind::of(&json!(0)).is_container());
    }
}
