use std::fmt;

use serde::{Deserialize, Serialize};

/// Controls what happens when a populated slot cannot be indexed by the next
/// path segment, e.g. a string where an object is needed.
///
/// Absent and `null` slots are always replaced by a fresh container,
/// regardless of the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Replace the slot with an empty container of the needed kind (default).
    #[default]
    Coerce,
    /// Reject the write with [`SetError::TypeConflict`](crate::SetError::TypeConflict).
    Fail,
}

/// Controls writes to array indices at or past the current length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// `index == len` appends; anything further is out of bounds (default).
    #[default]
    Append,
    /// Gaps between the current length and the index are filled with `null`.
    PadWithNull,
}

/// Configuration knobs passed to [`set_value_with_options`](crate::set_value_with_options).
///
/// The serde form is what the CLI accepts through `--opts`:
///
/// ```
/// # use jsonset_core::{ConflictPolicy, IndexPolicy, SetOptions};
/// let opts: SetOptions = serde_json::from_str(r#"{"conflict":"fail"}"#)?;
/// assert_eq!(opts.conflict_policy(), ConflictPolicy::Fail);
/// assert_eq!(opts.index_policy(), IndexPolicy::Append);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetOptions {
    conflict: ConflictPolicy,
    index: IndexPolicy,
}

impl SetOptions {
    /// Returns the configured conflict policy.
    #[must_use]
    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.conflict
    }

    /// Returns the configured array index policy.
    #[must_use]
    pub fn index_policy(&self) -> IndexPolicy {
        self.index
    }

    /// Sets the conflict policy.
    ///
    /// ```
    /// # use jsonset_core::{ConflictPolicy, SetOptions};
    /// let opts = SetOptions::default().with_conflict_policy(ConflictPolicy::Fail);
    /// assert_eq!(opts.conflict_policy(), ConflictPolicy::Fail);
    /// ```
    #[must_use]
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict = policy;
        self
    }

    /// Sets the array index policy.
    ///
    /// ```
    /// # use jsonset_core::{IndexPolicy, SetOptions};
    /// let opts = SetOptions::default().with_index_policy(IndexPolicy::PadWithNull);
    /// assert_eq!(opts.index_policy(), IndexPolicy::PadWithNull);
    /// ```
    #[must_use]
    pub fn with_index_policy(mut self, policy: IndexPolicy) -> Self {
        self.index = policy;
        self
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictPolicy::Coerce => f.write_str("coerce"),
            ConflictPolicy::Fail => f.write_str("fail"),
        }
    }
}

impl fmt::Display for IndexPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexPolicy::Append => f.write_str("append"),
            IndexPolicy::PadWithNull => f.write_str("pad_with_null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_coerce_and_append() {
        let opts = SetOptions::default();
        assert_eq!(opts.conflict_policy(), ConflictPolicy::Coerce);
        assert_eq!(opts.index_policy(), IndexPolicy::Append);
    }

    #[test]
    fn serde_form_uses_snake_case() {
        let opts = SetOptions::default()
            .with_conflict_policy(ConflictPolicy::Fail)
            .with_index_policy(IndexPolicy::PadWithNull);
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"conflict":"fail","index":"pad_with_null"}"#);
        let decoded: SetOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, opts);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<SetOptions>(r#"{"strict":true}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }
}
