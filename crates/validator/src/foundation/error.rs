//! Error types for validation failures
//!
//! Every validator in this crate reports failures through [`ValidationError`].
//! The error carries a stable `code` for programmatic handling, a
//! human-readable `message`, and ordered `params` describing the offending
//! value. [`ErrorKind`] groups codes into the failure taxonomy shared by the
//! numeric, network and collection validators.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Failure taxonomy shared by all validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The caller passed a value of a type the validator does not support.
    ///
    /// This is a contract violation at the call site, not a data failure.
    TypeMismatch,
    /// A present numeric value violates its required bound.
    OutOfRange,
    /// A string value is not among the configured vocabulary.
    NotInAllowedSet,
    /// A value that must be unique occurs more than once.
    DuplicateValue,
    /// A parsed network address or CIDR has the wrong IP version.
    WrongAddressFamily,
    /// The textual input could not be parsed by any recognized grammar.
    MalformedInput,
}

impl ErrorKind {
    /// Stable error code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::OutOfRange => "out_of_range",
            Self::NotInAllowedSet => "not_in_allowed_set",
            Self::DuplicateValue => "duplicate_value",
            Self::WrongAddressFamily => "wrong_address_family",
            Self::MalformedInput => "malformed_input",
        }
    }

    /// Looks up the kind for a stable error code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "type_mismatch" => Some(Self::TypeMismatch),
            "out_of_range" => Some(Self::OutOfRange),
            "not_in_allowed_set" => Some(Self::NotInAllowedSet),
            "duplicate_value" => Some(Self::DuplicateValue),
            "wrong_address_family" => Some(Self::WrongAddressFamily),
            "malformed_input" => Some(Self::MalformedInput),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use tovalidate::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::out_of_range("must be greater than zero")
///     .with_field("weight")
///     .with_param("actual", "0");
///
/// assert_eq!(error.kind(), Some(ErrorKind::OutOfRange));
/// assert_eq!(error.param("actual"), Some("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "out_of_range", "duplicate_value", "no_spaces"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field path, set by the caller that owns the schema.
    pub field: Option<Cow<'static, str>>,

    /// Parameters describing the failure, in insertion order.
    ///
    /// Example: `[("value", "green"), ("allowed", "red, blue")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Nested validation errors.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// ```
    /// use tovalidate::foundation::ValidationError;
    ///
    /// let error = ValidationError::new("no_spaces", "must not contain spaces");
    /// assert_eq!(error.code, "no_spaces");
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Creates an error of the given kind, using the kind's code.
    pub fn of_kind(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(kind.code(), message)
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the taxonomy kind of this error.
    ///
    /// Errors whose code is not one of the shared kind codes may still
    /// declare a kind through a `kind` parameter (character-set validators
    /// do this). Returns `None` for errors outside the taxonomy.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_code(&self.code).or_else(|| self.param("kind").and_then(ErrorKind::from_code))
    }

    /// Returns true if this error is of the given kind.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == Some(kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        validator: &'static str,
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let actual = actual.into();
        Self::of_kind(
            ErrorKind::TypeMismatch,
            format!("{validator} validation failure: unknown type {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }

    /// Creates an "out_of_range" error.
    pub fn out_of_range(message: impl Into<Cow<'static, str>>) -> Self {
        Self::of_kind(ErrorKind::OutOfRange, message)
    }

    /// Creates a "not_in_allowed_set" error naming the value and the vocabulary.
    pub fn not_in_allowed_set(value: impl Into<String>, allowed: &[String]) -> Self {
        let value = value.into();
        let allowed = allowed.join(", ");
        Self::of_kind(
            ErrorKind::NotInAllowedSet,
            format!("'{value}' is not one of [{allowed}]"),
        )
        .with_param("value", value)
        .with_param("allowed", allowed)
    }

    /// Creates a "duplicate_value" error.
    pub fn duplicate_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::of_kind(
            ErrorKind::DuplicateValue,
            format!("duplicate value found: '{value}'"),
        )
        .with_param("value", value)
    }

    /// Creates a "wrong_address_family" error.
    pub fn wrong_address_family(
        message: impl Into<Cow<'static, str>>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::of_kind(ErrorKind::WrongAddressFamily, message)
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates a "malformed_input" error.
    pub fn malformed_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::of_kind(ErrorKind::MalformedInput, message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.kind(), None);
    }

    #[test]
    fn test_error_with_field() {
        let error = ValidationError::out_of_range("must be a valid port number").with_field("port");
        assert_eq!(error.field.as_deref(), Some("port"));
        assert_eq!(
            error.to_string(),
            "[port] out_of_range: must be a valid port number"
        );
    }

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in [
            ErrorKind::TypeMismatch,
            ErrorKind::OutOfRange,
            ErrorKind::NotInAllowedSet,
            ErrorKind::DuplicateValue,
            ErrorKind::WrongAddressFamily,
            ErrorKind::MalformedInput,
        ] {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code("min_length"), None);
    }

    #[test]
    fn test_kind_from_param() {
        let error = ValidationError::new("no_periods", "must not contain periods")
            .with_param("kind", ErrorKind::MalformedInput.code());
        assert!(error.is(ErrorKind::MalformedInput));
    }

    #[test]
    fn test_not_in_allowed_set_message() {
        let allowed = vec!["red".to_string(), "blue".to_string()];
        let error = ValidationError::not_in_allowed_set("green", &allowed);
        assert_eq!(error.message, "'green' is not one of [red, blue]");
        assert_eq!(error.param("value"), Some("green"));
        assert_eq!(error.param("allowed"), Some("red, blue"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = ValidationError::type_mismatch("is_greater_than_zero", "number", "string");
        assert!(error.is(ErrorKind::TypeMismatch));
        assert_eq!(
            error.message,
            "is_greater_than_zero validation failure: unknown type string"
        );
    }

    #[test]
    fn test_nested_display() {
        let error = ValidationError::new("root", "Root error")
            .with_nested_error(ValidationError::duplicate_value("red"));
        let display = error.to_string();
        assert!(display.contains("Nested errors"));
        assert!(display.contains("duplicate value found: 'red'"));
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::out_of_range("must be greater than zero");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
