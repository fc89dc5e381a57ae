//! Numeric validators
//!
//! Optional numeric fields are either integers or floats. [`Number`] carries
//! either one, so a single validator covers both without runtime type
//! inspection. `None` always passes: an unset optional field has no
//! constraint.

use std::fmt;

use crate::foundation::validatable::json_type_mismatch;
use crate::foundation::{AsValidatable, Validate, ValidationError, ValidationResult};

/// Largest valid TCP/UDP port.
pub const MAX_PORT: i64 = 65_535;

// ============================================================================
// NUMBER
// ============================================================================

/// An integer or floating-point value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// True if the value is strictly greater than zero. NaN is not.
    #[must_use]
    pub fn is_positive(self) -> bool {
        match self {
            Self::Int(v) => v > 0,
            Self::Float(v) => v > 0.0,
        }
    }

    /// True if `0 < value <= 65535`. NaN is not.
    #[must_use]
    pub fn is_port(self) -> bool {
        match self {
            Self::Int(v) => v > 0 && v <= MAX_PORT,
            Self::Float(v) => v > 0.0 && v <= MAX_PORT as f64,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl AsValidatable<Number> for Number {
    type Output<'a> = Number;

    #[inline]
    fn as_validatable(&self) -> Result<Number, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<Number> for i64 {
    type Output<'a> = Number;

    #[inline]
    fn as_validatable(&self) -> Result<Number, ValidationError> {
        Ok(Number::Int(*self))
    }
}

impl AsValidatable<Number> for f64 {
    type Output<'a> = Number;

    #[inline]
    fn as_validatable(&self) -> Result<Number, ValidationError> {
        Ok(Number::Float(*self))
    }
}

impl AsValidatable<Number> for serde_json::Value {
    type Output<'a> = Number;

    fn as_validatable(&self) -> Result<Number, ValidationError> {
        match self {
            serde_json::Value::Number(n) => Ok(n
                .as_i64()
                .map(Number::Int)
                .or_else(|| n.as_f64().map(Number::Float))
                .unwrap_or(Number::Float(f64::NAN))),
            other => Err(json_type_mismatch("number", "number", other)),
        }
    }
}

// ============================================================================
// VALIDATORS
// ============================================================================

crate::validator! {
    /// Validates that a number is strictly greater than zero.
    pub GreaterThanZero for Number;
    rule(input) { input.is_positive() }
    error(input) {
        ValidationError::out_of_range("must be greater than zero")
            .with_param("actual", input.to_string())
    }
    fn greater_than_zero();
}

crate::validator! {
    /// Validates that a number is a valid TCP/UDP port (1-65535).
    pub PortNumber for Number;
    rule(input) { input.is_port() }
    error(input) {
        ValidationError::out_of_range("must be a valid port number")
            .with_param("min", "1")
            .with_param("max", MAX_PORT.to_string())
            .with_param("actual", input.to_string())
    }
    fn port_number();
}

/// Checks an optional value is greater than zero. `None` passes.
///
/// ```
/// use tovalidate::validators::is_greater_than_zero;
///
/// assert!(is_greater_than_zero(Some(5)).is_ok());
/// assert!(is_greater_than_zero(Some(0.5)).is_ok());
/// assert!(is_greater_than_zero(Some(0)).is_err());
/// assert!(is_greater_than_zero(None::<i64>).is_ok());
/// ```
pub fn is_greater_than_zero<N: Into<Number>>(value: Option<N>) -> ValidationResult<()> {
    match value {
        None => Ok(()),
        Some(n) => GreaterThanZero.validate(&n.into()),
    }
}

/// Checks an optional value is a valid port number. `None` passes.
///
/// ```
/// use tovalidate::validators::is_valid_port_number;
///
/// assert!(is_valid_port_number(Some(443)).is_ok());
/// assert!(is_valid_port_number(Some(0)).is_err());
/// assert!(is_valid_port_number(Some(70_000)).is_err());
/// ```
pub fn is_valid_port_number<N: Into<Number>>(value: Option<N>) -> ValidationResult<()> {
    match value {
        None => Ok(()),
        Some(n) => PortNumber.validate(&n.into()),
    }
}
