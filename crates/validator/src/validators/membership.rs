//! Set-membership validators
//!
//! [`AllowedSet`] is the vocabulary a membership check is bound to. It is
//! built once, never mutated, and shared by every call of the validator that
//! owns it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// ALLOWED SET
// ============================================================================

/// An immutable, ordered vocabulary of allowed strings.
///
/// Keeps the original spelling (used in error messages, in order) next to a
/// lower-cased lookup set for case-insensitive checks. Deserializes from and
/// serializes to a plain list of strings.
///
/// ```
/// use tovalidate::validators::AllowedSet;
///
/// let set: AllowedSet = serde_json::from_str(r#"["HTTP", "https"]"#).unwrap();
/// assert!(set.contains("HTTP"));
/// assert!(!set.contains("http"));
/// assert!(set.contains_ignore_case("http"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AllowedSet {
    values: Vec<String>,
    lowered: HashSet<String>,
}

impl AllowedSet {
    /// Builds a set from any sequence of strings.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let lowered = values.iter().map(|v| v.to_lowercase()).collect();
        Self { values, lowered }
    }

    /// The allowed values in their original spelling and order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact, case-sensitive membership.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Case-insensitive membership; `value` is lower-cased before lookup.
    #[must_use]
    pub fn contains_ignore_case(&self, value: &str) -> bool {
        self.contains_lowered(&value.to_lowercase())
    }

    /// Membership of an already lower-cased value.
    pub(crate) fn contains_lowered(&self, lowered: &str) -> bool {
        self.lowered.contains(lowered)
    }
}

impl From<Vec<String>> for AllowedSet {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}

impl From<AllowedSet> for Vec<String> {
    fn from(set: AllowedSet) -> Self {
        set.values
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that a string equals one of the allowed values exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    set: AllowedSet,
}

impl OneOf {
    #[must_use]
    pub fn new(set: AllowedSet) -> Self {
        Self { set }
    }

    /// Returns true if `value` is in the set. An empty set matches nothing.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.set.contains(value)
    }

    #[must_use]
    pub fn allowed(&self) -> &AllowedSet {
        &self.set
    }
}

impl Validate for OneOf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.matches(input) {
            Ok(())
        } else {
            Err(ValidationError::not_in_allowed_set(input, self.set.values()))
        }
    }
}

/// Creates a case-sensitive "is one of" validator.
///
/// ```
/// use tovalidate::validators::is_one_of;
///
/// let scheme = is_one_of(["http", "https"]);
/// assert!(scheme.matches("https"));
/// assert!(!scheme.matches("HTTPS"));
/// ```
pub fn is_one_of<I, S>(set: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(AllowedSet::new(set))
}

// ============================================================================
// ONE OF (CASE-INSENSITIVE)
// ============================================================================

/// Validates that a string equals one of the allowed values, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOfCaseInsensitive {
    set: AllowedSet,
}

impl OneOfCaseInsensitive {
    #[must_use]
    pub fn new(set: AllowedSet) -> Self {
        Self { set }
    }

    /// Returns true if the lower-cased `value` is in the lower-cased set.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.set.contains_ignore_case(value)
    }

    #[must_use]
    pub fn allowed(&self) -> &AllowedSet {
        &self.set
    }
}

impl Validate for OneOfCaseInsensitive {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.matches(input) {
            Ok(())
        } else {
            Err(ValidationError::not_in_allowed_set(input, self.set.values()))
        }
    }
}

/// Creates a case-insensitive "is one of" validator.
///
/// ```
/// use tovalidate::validators::is_one_of_case_insensitive;
///
/// let v = is_one_of_case_insensitive(["A", "b"]);
/// assert!(v.matches("a"));
/// assert!(v.matches("B"));
/// assert!(!v.matches("c"));
/// ```
pub fn is_one_of_case_insensitive<I, S>(set: I) -> OneOfCaseInsensitive
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOfCaseInsensitive::new(AllowedSet::new(set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_of_exact() {
        let v = is_one_of(["ALL", "NONE"]);
        assert!(v.matches("ALL"));
        assert!(!v.matches("all"));
        assert!(!v.matches("SOME"));
    }

    #[test]
    fn test_one_of_empty_set_matches_nothing() {
        let v = is_one_of(Vec::<String>::new());
        assert!(!v.matches(""));
        assert!(!v.matches("anything"));
        assert!(v.validate("anything").is_err());
    }

    #[test]
    fn test_one_of_error() {
        let err = is_one_of(["red", "blue"]).validate("green").unwrap_err();
        assert!(err.is(ErrorKind::NotInAllowedSet));
        assert_eq!(err.param("value"), Some("green"));
        assert_eq!(err.param("allowed"), Some("red, blue"));
    }

    #[test]
    fn test_one_of_case_insensitive() {
        let v = is_one_of_case_insensitive(["A", "b"]);
        assert!(v.matches("a"));
        assert!(v.matches("A"));
        assert!(v.matches("B"));
        assert!(!v.matches("c"));
        assert!(v.validate("c").is_err());
    }

    #[test]
    fn test_one_of_case_insensitive_unicode() {
        let v = is_one_of_case_insensitive(["ÉTÉ"]);
        assert!(v.matches("été"));
    }

    #[test]
    fn test_allowed_set_preserves_order_and_spelling() {
        let set = AllowedSet::new(["Zeta", "alpha", "Mid"]);
        assert_eq!(set.values(), ["Zeta", "alpha", "Mid"]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_allowed_set_serde() {
        let set: AllowedSet = serde_json::from_str(r#"["HTTP","https"]"#).unwrap();
        assert!(set.contains_ignore_case("Http"));
        let back = serde_json::to_string(&set).unwrap();
        assert_eq!(back, r#"["HTTP","https"]"#);
    }

    #[test]
    fn test_allowed_set_from_iter() {
        let set: AllowedSet = ["x", "Y"].into_iter().collect();
        assert!(set.contains("Y"));
        assert!(set.contains_ignore_case("y"));
    }
}
