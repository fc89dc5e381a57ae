//! String-shape validators
//!
//! Character-set checks for identifiers and names. Each check exists both as
//! a plain predicate (`has_no_spaces`, ...) for callers that only need a
//! boolean, and as a unit validator (`NoSpaces`, ...) that reports a
//! structured error.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorKind, ValidationError};

static ALPHANUMERIC_UNDERSCORE_DASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9\-_]+$").expect("alphanumeric/underscore/dash pattern is valid")
});

/// Returns true if the string contains no space character.
///
/// Only U+0020 counts; tabs and newlines are not spaces here.
///
/// ```
/// use tovalidate::validators::has_no_spaces;
///
/// assert!(has_no_spaces("abc"));
/// assert!(!has_no_spaces("ab c"));
/// assert!(has_no_spaces(""));
/// ```
#[must_use]
pub fn has_no_spaces(s: &str) -> bool {
    !s.contains(' ')
}

/// Returns true if the string contains no period.
#[must_use]
pub fn has_no_periods(s: &str) -> bool {
    !s.contains('.')
}

/// Returns true if the string is non-empty and consists only of ASCII
/// letters, digits, underscores and dashes.
///
/// ```
/// use tovalidate::validators::is_alphanumeric_underscore_dash;
///
/// assert!(is_alphanumeric_underscore_dash("a-b_9"));
/// assert!(!is_alphanumeric_underscore_dash("a.b"));
/// assert!(!is_alphanumeric_underscore_dash(""));
/// ```
#[must_use]
pub fn is_alphanumeric_underscore_dash(s: &str) -> bool {
    ALPHANUMERIC_UNDERSCORE_DASH.is_match(s)
}

fn shape_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code, message).with_param("kind", ErrorKind::MalformedInput.code())
}

crate::validator! {
    /// Validates that a string contains no space character.
    pub NoSpaces for str;
    rule(input) { has_no_spaces(input) }
    error(input) { shape_error("no_spaces", "cannot contain spaces") }
    fn no_spaces();
}

crate::validator! {
    /// Validates that a string contains no period.
    pub NoPeriods for str;
    rule(input) { has_no_periods(input) }
    error(input) { shape_error("no_periods", "cannot contain periods") }
    fn no_periods();
}

crate::validator! {
    /// Validates that a string is a non-empty run of `[A-Za-z0-9_-]`.
    pub AlphanumericUnderscoreDash for str;
    rule(input) { is_alphanumeric_underscore_dash(input) }
    error(input) {
        shape_error(
            "alphanumeric_underscore_dash",
            "must consist of only alphanumeric, dash, or underscore characters",
        )
    }
    fn alphanumeric_underscore_dash();
}
