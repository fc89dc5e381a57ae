//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`]: create a unit validator (struct + `Validate` impl + optional factory fn)
//! - [`compose!`]: AND-chain multiple validators
//!
//! ```
//! use tovalidate::validator;
//! use tovalidate::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     /// Rejects strings containing a slash.
//!     pub NoSlashes for str;
//!     rule(input) { !input.contains('/') }
//!     error(input) { ValidationError::new("no_slashes", "must not contain slashes") }
//!     fn no_slashes();
//! }
//!
//! assert!(no_slashes().validate("a-b").is_ok());
//! assert!(NoSlashes.validate("a/b").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit validator: struct definition, `Validate` implementation,
/// and optionally a `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` is always applied.
///
/// ```rust,ignore
/// validator! {
///     pub NoSpaces for str;
///     rule(input) { !input.contains(' ') }
///     error(input) { ValidationError::new("no_spaces", "must not contain spaces") }
///     fn no_spaces();
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```rust,ignore
/// let validator = compose![NoSpaces, NoPeriods, AlphanumericUnderscoreDash];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
