//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//!
//! Validators are generic over their input type and compose with the
//! logical combinators from [`ValidateExt`]:
//!
//! ```
//! use tovalidate::foundation::{Validate, ValidateExt};
//! use tovalidate::validators::{NoPeriods, NoSpaces};
//!
//! let hostname_label = NoSpaces.and(NoPeriods);
//! assert!(hostname_label.validate("edge-01").is_ok());
//! assert!(hostname_label.validate("edge.01").is_err());
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{ErrorKind, ValidationError};
pub use traits::{Validate, ValidateExt};
pub use validatable::AsValidatable;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a value with a validator.
///
/// Convenience for one-off checks where naming the trait is noise.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> ValidationResult<()>
where
    V: Validate,
{
    validator.validate(value)
}
