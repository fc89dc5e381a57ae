//! Combinators for composing validators
//!
//! - [`And`] - both validators must pass
//! - [`Or`] - at least one validator must pass
//! - [`Not`] - inverts a validator
//! - [`Optional`] - `None` passes, `Some` is validated
//!
//! The same operations are available as methods through
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod not;
pub mod optional;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
