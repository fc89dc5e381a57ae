//! AsValidatable trait with GAT for universal type conversion
//!
//! Lets a validator written for one input type accept several caller-side
//! representations. Conversions from `serde_json::Value` are where untyped
//! input meets typed validators: a value of the wrong JSON type becomes a
//! `type_mismatch` error instead of a silent pass.

use crate::foundation::ValidationError;
use std::borrow::Borrow;

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses a GAT so implementations can return either a borrowed reference or
/// an owned value, unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// STRING CONVERSIONS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for std::borrow::Cow<'_, str> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_ref())
    }
}

// ============================================================================
// SLICE CONVERSIONS
// ============================================================================

impl<T> AsValidatable<[T]> for [T] {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self)
    }
}

impl<T> AsValidatable<[T]> for Vec<T> {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self.as_slice())
    }
}

// ============================================================================
// SERDE JSON VALUE CONVERSIONS
// ============================================================================

/// Returns a human-readable type name for a JSON value.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Builds the `type_mismatch` error used by every JSON conversion.
pub(crate) fn json_type_mismatch(
    validator: &'static str,
    expected: &'static str,
    value: &serde_json::Value,
) -> ValidationError {
    ValidationError::type_mismatch(validator, expected, json_type_name(value))
}

impl AsValidatable<str> for serde_json::Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            serde_json::Value::String(s) => Ok(s.as_str()),
            other => Err(json_type_mismatch("string", "string", other)),
        }
    }
}

impl AsValidatable<[serde_json::Value]> for serde_json::Value {
    type Output<'a>
        = &'a [serde_json::Value]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[serde_json::Value], ValidationError> {
        match self {
            serde_json::Value::Array(arr) => Ok(arr.as_slice()),
            other => Err(json_type_mismatch("array", "array", other)),
        }
    }
}
