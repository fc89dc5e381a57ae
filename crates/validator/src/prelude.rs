//! Prelude module for convenient imports.
//!
//! ```
//! use tovalidate::prelude::*;
//!
//! let v = NoSpaces.and(NoPeriods);
//! assert!(v.validate("edge").is_ok());
//! ```

pub use crate::foundation::{
    AsValidatable, ErrorKind, Validate, ValidateExt, ValidationError, ValidationResult,
};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{And, Not, Optional, Or, and, not, optional, or};
