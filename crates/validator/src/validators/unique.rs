//! Case-insensitive unique-membership validator for collections
//!
//! Checks that every element of a collection renders to a string that is in
//! an allowed vocabulary and that no two elements render to the same string,
//! both ignoring case. Elements only need to implement [`Display`]; the
//! rendered text is their canonical form.

use std::collections::HashSet;
use std::fmt::{self, Display};
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};
use crate::validators::membership::AllowedSet;

/// Validates a collection of stringable elements against an allowed set,
/// rejecting values outside the set and case-insensitive duplicates.
///
/// Absent elements (`None`) are skipped. An absent collection passes; use
/// [`UniqueStringSet::check`] when the collection itself is optional.
///
/// ```
/// use tovalidate::foundation::{ErrorKind, Validate};
/// use tovalidate::validators::unique_string_set;
///
/// let colors = unique_string_set::<&str>(["red", "blue"]);
/// assert!(colors.validate(&[Some("Red"), Some("blue")]).is_ok());
///
/// let err = colors.validate(&[Some("red"), Some("RED")]).unwrap_err();
/// assert!(err.is(ErrorKind::DuplicateValue));
///
/// assert!(colors.check(None).is_ok());
/// ```
pub struct UniqueStringSet<T> {
    set: AllowedSet,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> UniqueStringSet<T> {
    #[must_use]
    pub fn new(set: AllowedSet) -> Self {
        Self {
            set,
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn allowed(&self) -> &AllowedSet {
        &self.set
    }

    /// Runs the check over rendered elements in order.
    ///
    /// Shared by the typed entry point and the JSON entry point so both apply
    /// identical membership and duplicate rules. An `Err` element stops the
    /// walk at its position, so the first failure in order is reported.
    pub(crate) fn check_rendered<I, S>(&self, rendered: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = Result<Option<S>, ValidationError>>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::with_capacity(self.set.len());
        for item in rendered {
            let Some(item) = item? else {
                continue;
            };
            let lowered = item.as_ref().to_lowercase();
            if !self.set.contains_lowered(&lowered) {
                tracing::trace!(value = %lowered, code = "not_in_allowed_set", "rejected collection element");
                return Err(ValidationError::not_in_allowed_set(lowered, self.set.values()));
            }
            if seen.contains(&lowered) {
                tracing::trace!(value = %lowered, code = "duplicate_value", "rejected collection element");
                return Err(ValidationError::duplicate_value(lowered));
            }
            seen.insert(lowered);
        }
        Ok(())
    }
}

impl<T: Display> UniqueStringSet<T> {
    /// Validates a possibly absent collection. `None` passes.
    pub fn check(&self, collection: Option<&[Option<T>]>) -> Result<(), ValidationError> {
        match collection {
            None => Ok(()),
            Some(items) => self.validate(items),
        }
    }
}

impl<T: Display> Validate for UniqueStringSet<T> {
    type Input = [Option<T>];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.check_rendered(
            input
                .iter()
                .map(|item| Ok::<_, ValidationError>(item.as_ref().map(ToString::to_string))),
        )
    }
}

impl<T> Clone for UniqueStringSet<T> {
    fn clone(&self) -> Self {
        Self::new(self.set.clone())
    }
}

impl<T> fmt::Debug for UniqueStringSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueStringSet")
            .field("set", &self.set)
            .finish()
    }
}

/// Creates a case-insensitive unique-membership validator.
pub fn unique_string_set<T>(set: impl IntoIterator<Item = impl Into<String>>) -> UniqueStringSet<T> {
    UniqueStringSet::new(AllowedSet::new(set))
}
