use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents a single step within a document path.
///
/// A segment either names an object key or an array index.
///
/// ```
/// # use jsonset_core::PathSegment;
/// let key = PathSegment::key("name");
/// let index = PathSegment::index(2);
/// assert!(matches!(key, PathSegment::Key(_)));
/// assert!(matches!(index, PathSegment::Index(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object key lookup.
    Key(String),
    /// Array index lookup.
    Index(usize),
}

impl PathSegment {
    /// Creates a key segment.
    #[must_use]
    pub fn key<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Self::Key(value.into())
    }

    /// Creates an index segment.
    #[must_use]
    pub fn index(value: usize) -> Self {
        Self::Index(value)
    }

    /// Returns the object key this segment addresses.
    ///
    /// Indices address objects through their decimal text.
    ///
    /// ```
    /// # use jsonset_core::PathSegment;
    /// assert_eq!(PathSegment::key("id").as_object_key(), "id");
    /// assert_eq!(PathSegment::index(3).as_object_key(), "3");
    /// ```
    #[must_use]
    pub fn as_object_key(&self) -> Cow<'_, str> {
        match self {
            Self::Key(key) => Cow::Borrowed(key),
            Self::Index(index) => Cow::Owned(index.to_string()),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "\"{key}\""),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl Serialize for PathSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Key(key) => serializer.serialize_str(key),
            Self::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

impl<'de> Deserialize<'de> for PathSegment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = PathSegment;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string key or non-negative integer index")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(PathSegment::Key(v.to_owned()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(PathSegment::Key(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let index = usize::try_from(v)
                    .map_err(|_| E::custom(format!("array index must be non-negative: {v}")))?;
                Ok(PathSegment::Index(index))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let index =
                    usize::try_from(v).map_err(|_| E::custom("array index exceeds usize"))?;
                Ok(PathSegment::Index(index))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

/// Location of a value within a JSON document.
///
/// The empty path denotes the document root. Paths display in the
/// `$["key"][0]` notation shown next to a selected node:
///
/// ```
/// # use jsonset_core::{Path, PathSegment};
/// let path = Path::new()
///     .with_segment(PathSegment::key("customer"))
///     .with_segment(PathSegment::index(0))
///     .with_segment(PathSegment::key("name"));
/// assert_eq!(path.to_string(), r#"$["customer"][0]["name"]"#);
/// assert_eq!(Path::new().to_string(), "$");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// Creates an empty (root) path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a path from its JSON array form, e.g. `["a", 0]`.
    ///
    /// ```
    /// # use jsonset_core::{Path, PathSegment};
    /// let path = Path::from_json_str(r#"["a", 0]"#)?;
    /// assert_eq!(path.segments(), [PathSegment::key("a"), PathSegment::index(0)]);
    /// assert!(Path::from_json_str("[-1]").is_err());
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Appends a new segment, returning the extended path.
    #[must_use]
    pub fn with_segment(mut self, segment: PathSegment) -> Self {
        self.0.push(segment);
        self
    }

    /// Returns the underlying segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether the path addresses the document root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pushes a new segment in-place.
    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    /// Pops the last segment off the path.
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(value: Vec<PathSegment>) -> Self {
        Self(value)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            write!(f, "[{segment}]")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Formats a path for display, `$` for the root.
///
/// Keys are wrapped in double quotes without escaping, so a key containing a
/// quote renders ambiguously.
///
/// ```
/// # use jsonset_core::{format_path, Path};
/// let path = Path::from_json_str(r#"["customer", 0, "name"]"#)?;
/// assert_eq!(format_path(&path), r#"$["customer"][0]["name"]"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn format_path(path: &Path) -> String {
    path.to_string()
}
