//! NOT combinator - logical negation of validators

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// Succeeds when the inner validator fails and vice versa.
///
/// ```
/// use tovalidate::foundation::{Validate, ValidateExt};
/// use tovalidate::validators::is_one_of_case_insensitive;
///
/// let not_reserved = is_one_of_case_insensitive(["ALL", "NONE"]).not();
/// assert!(not_reserved.validate("mid").is_ok());
/// assert!(not_reserved.validate("all").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
