//! Flat, display-oriented rows describing a node's immediate children, and
//! their projection back into a single JSON value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ValueKind;

/// One display row of a node.
///
/// Rows for nested arrays and objects carry only their key and kind; their
/// `value` is `null`.
///
/// ```
/// # use jsonset_core::{Row, ValueKind};
/// let row: Row = serde_json::from_str(r#"{"key":"name","value":"jd","type":"string"}"#)?;
/// assert_eq!(row.key.as_deref(), Some("name"));
/// assert_eq!(row.kind, ValueKind::String);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Field name; absent for array elements and a lone root scalar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Scalar value of the row.
    #[serde(default)]
    pub value: Value,
    /// Kind tag of the value the row stands for.
    #[serde(rename = "type")]
    pub kind: ValueKind,
}

impl Row {
    /// Creates a row whose kind is inferred from `value`.
    ///
    /// ```
    /// # use jsonset_core::{Row, ValueKind};
    /// # use serde_json::json;
    /// let row = Row::new(Some("n".into()), json!(1));
    /// assert_eq!(row.kind, ValueKind::Number);
    /// ```
    #[must_use]
    pub fn new(key: Option<String>, value: Value) -> Self {
        let kind = ValueKind::of(&value);
        Self { key, value, kind }
    }

    /// Returns the key when it is present and non-empty.
    #[must_use]
    pub fn field_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }

    fn for_child(key: Option<String>, child: &Value) -> Self {
        let kind = ValueKind::of(child);
        let value = if kind.is_container() { Value::Null } else { child.clone() };
        Self { key, value, kind }
    }
}

/// Derives the rows of a value's immediate children.
///
/// A scalar yields a single keyless row; object entries yield keyed rows and
/// array elements keyless ones.
///
/// ```
/// # use jsonset_core::{rows_of, ValueKind};
/// # use serde_json::json;
/// let rows = rows_of(&json!({"id": 7, "tags": ["a"]}));
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].kind, ValueKind::Array);
/// ```
#[must_use]
pub fn rows_of(value: &Value) -> Vec<Row> {
    match value {
        Value::Object(map) => {
            map.iter().map(|(key, child)| Row::for_child(Some(key.clone()), child)).collect()
        }
        Value::Array(items) => items.iter().map(|child| Row::for_child(None, child)).collect(),
        scalar => vec![Row::new(None, scalar.clone())],
    }
}

/// Projects rows into one JSON value.
///
/// - no rows: an empty object;
/// - a single keyless scalar row: its value, unwrapped;
/// - otherwise: an object of every keyed, non-container row in input order.
///   Later duplicates overwrite earlier values but keep the first position.
///
/// ```
/// # use jsonset_core::{normalize, Row, ValueKind};
/// # use serde_json::json;
/// let rows = vec![
///     Row::new(Some("a".into()), json!(1)),
///     Row { key: Some("b".into()), value: json!(null), kind: ValueKind::Array },
///     Row::new(Some("c".into()), json!(2)),
/// ];
/// assert_eq!(normalize(&rows), json!({"a": 1, "c": 2}));
/// ```
#[must_use]
pub fn normalize(rows: &[Row]) -> Value {
    match rows {
        [] => Value::Object(Map::new()),
        [only] if only.field_key().is_none() && !only.kind.is_container() => only.value.clone(),
        _ => {
            let mut object = Map::new();
            for row in rows.iter().filter(|row| !row.kind.is_container()) {
                if let Some(key) = row.field_key() {
                    object.insert(key.to_owned(), row.value.clone());
                }
            }
            Value::Object(object)
        }
    }
}

/// Renders [`normalize`] as 2-space indented JSON, the text offered for
/// editing.
///
/// ```
/// # use jsonset_core::{normalize_to_text, Row};
/// # use serde_json::json;
/// assert_eq!(normalize_to_text(&[]), "{}");
/// assert_eq!(normalize_to_text(&[Row::new(None, json!("hello"))]), "\"hello\"");
/// ```
#[must_use]
pub fn normalize_to_text(rows: &[Row]) -> String {
    serde_json::to_string_pretty(&normalize(rows)).expect("serializing a Value is infallible")
}
