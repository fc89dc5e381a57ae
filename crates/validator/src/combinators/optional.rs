//! OPTIONAL combinator - validates Option types
//!
//! An unset optional field carries no constraint, so `None` always passes.

use crate::foundation::{Validate, ValidationError};

/// Makes a validator work with `Option` inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

pub fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::validators::{Number, PortNumber};

    #[test]
    fn test_optional_none() {
        let validator = optional(PortNumber);
        assert!(validator.validate(&None).is_ok());
    }

    #[test]
    fn test_optional_some_valid() {
        let validator = optional(PortNumber);
        assert!(validator.validate(&Some(Number::Int(8080))).is_ok());
    }

    #[test]
    fn test_optional_some_invalid() {
        let validator = optional(PortNumber);
        let err = validator.validate(&Some(Number::Int(0))).unwrap_err();
        assert!(err.is(ErrorKind::OutOfRange));
    }
}
