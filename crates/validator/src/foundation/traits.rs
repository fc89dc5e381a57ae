//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use crate::foundation::validatable::AsValidatable;
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are generic over their input type, so a validator for `str`
/// cannot be handed a number by mistake. Inputs are always borrowed; a
/// validator never mutates what it checks.
///
/// # Examples
///
/// ```
/// use tovalidate::foundation::{Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("not_blank", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("x").is_ok());
/// assert!(NotBlank.validate("  ").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// Conversion failures (for instance a JSON number handed to a string
    /// validator) surface as `type_mismatch` errors.
    ///
    /// ```
    /// use tovalidate::foundation::Validate;
    /// use tovalidate::validators::NoSpaces;
    /// use serde_json::json;
    ///
    /// assert!(NoSpaces.validate_any(&String::from("abc")).is_ok());
    /// assert!(NoSpaces.validate_any(&json!("a b")).is_err());
    /// assert!(NoSpaces.validate_any(&json!(42)).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), crate::foundation::ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use tovalidate::prelude::*;
///
/// let name = NoSpaces.and(NoPeriods);
/// assert!(name.validate("edge-01").is_ok());
/// assert!(name.validate("edge 01").is_err());
/// assert!(name.validate("edge.01").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Makes a validator optional.
    ///
    /// The validator succeeds if the input is `None` or if validation passes.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
