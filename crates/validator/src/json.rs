//! Validators over untyped `serde_json::Value` input.
//!
//! Typed validators make a wrong input type a compile error. Values arriving
//! from JSON carry no such guarantee, so these entry points check the JSON
//! type first and report a `type_mismatch` error when it is wrong. JSON
//! `null` is treated as an unset optional field and always passes.
//!
//! ```
//! use serde_json::json;
//! use tovalidate::foundation::ErrorKind;
//! use tovalidate::json;
//!
//! assert!(json::is_valid_port_number(&json!(443)).is_ok());
//! assert!(json::is_valid_port_number(&json!(null)).is_ok());
//!
//! let err = json::is_valid_port_number(&json!("443")).unwrap_err();
//! assert!(err.is(ErrorKind::TypeMismatch));
//! ```

use serde_json::Value;

use crate::foundation::validatable::json_type_mismatch;
use crate::foundation::{AsValidatable, Validate, ValidationError, ValidationResult};
use crate::validators::membership::AllowedSet;
use crate::validators::numeric::{GreaterThanZero, Number, PortNumber};
use crate::validators::unique::UniqueStringSet;

fn validate_number<V>(validator: &V, name: &'static str, value: &Value) -> ValidationResult<()>
where
    V: Validate<Input = Number>,
{
    match value {
        Value::Null => Ok(()),
        Value::Number(_) => validator.validate_any(value),
        other => Err(json_type_mismatch(name, "number", other)),
    }
}

/// JSON form of [`is_greater_than_zero`](crate::validators::is_greater_than_zero).
pub fn is_greater_than_zero(value: &Value) -> ValidationResult<()> {
    validate_number(&GreaterThanZero, "is_greater_than_zero", value)
}

/// JSON form of [`is_valid_port_number`](crate::validators::is_valid_port_number).
pub fn is_valid_port_number(value: &Value) -> ValidationResult<()> {
    validate_number(&PortNumber, "is_valid_port_number", value)
}

/// JSON form of
/// [`is_valid_ipv6_address_or_cidr`](crate::validators::is_valid_ipv6_address_or_cidr).
#[cfg(feature = "network")]
pub fn is_valid_ipv6_address_or_cidr(value: &Value) -> ValidationResult<()> {
    match value {
        Value::Null => Ok(()),
        Value::String(s) => crate::validators::Ipv6AddressOrCidr.validate(s),
        other => Err(json_type_mismatch(
            "is_valid_ipv6_address_or_cidr",
            "string",
            other,
        )),
    }
}

// ============================================================================
// UNIQUE STRING SET
// ============================================================================

/// JSON form of [`UniqueStringSet`]: validates an array of strings.
///
/// `null` passes, as do `null` elements. Any other non-array value, or any
/// element that is neither a string nor `null`, is a `type_mismatch`.
/// Elements are checked in order and the first failure is reported.
#[derive(Debug, Clone)]
pub struct JsonUniqueStringSet {
    inner: UniqueStringSet<String>,
}

impl JsonUniqueStringSet {
    #[must_use]
    pub fn new(set: AllowedSet) -> Self {
        Self {
            inner: UniqueStringSet::new(set),
        }
    }

    #[must_use]
    pub fn allowed(&self) -> &AllowedSet {
        self.inner.allowed()
    }
}

impl Validate for JsonUniqueStringSet {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if input.is_null() {
            return Ok(());
        }
        let items = AsValidatable::<[Value]>::as_validatable(input).map_err(|_| {
            json_type_mismatch("unique_string_set", "array", input)
        })?;

        self.inner.check_rendered(items.iter().map(|item| match item {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            other => Err(json_type_mismatch("unique_string_set", "string", other)),
        }))
    }
}

/// Creates a [`JsonUniqueStringSet`].
///
/// ```
/// use serde_json::json;
/// use tovalidate::foundation::Validate;
/// use tovalidate::json::unique_string_set;
///
/// let v = unique_string_set(["red", "blue"]);
/// assert!(v.validate(&json!(["Red", null, "blue"])).is_ok());
/// assert!(v.validate(&json!(["red", "RED"])).is_err());
/// assert!(v.validate(&json!(null)).is_ok());
/// ```
pub fn unique_string_set(set: impl IntoIterator<Item = impl Into<String>>) -> JsonUniqueStringSet {
    JsonUniqueStringSet::new(AllowedSet::new(set))
}
