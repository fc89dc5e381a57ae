//! # tovalidate
//!
//! Standalone validation predicates for configuration and API input:
//! character-set checks, set membership, case-insensitive uniqueness over
//! collections, numeric bounds, and IPv6 address/CIDR well-formedness.
//!
//! ## Quick Start
//!
//! ```
//! use tovalidate::prelude::*;
//!
//! assert!(has_no_spaces("edge-01"));
//! assert!(is_valid_port_number(Some(443)).is_ok());
//!
//! let err = is_valid_ipv6_address_or_cidr(Some("10.0.0.0/8")).unwrap_err();
//! assert!(err.is(ErrorKind::WrongAddressFamily));
//!
//! let protocols = unique_string_set::<&str>(["http", "https"]);
//! assert!(protocols.validate(&[Some("HTTP"), Some("https")]).is_ok());
//! ```
//!
//! ## Built-in Validators
//!
//! - **String shape**: [`NoSpaces`](validators::NoSpaces),
//!   [`NoPeriods`](validators::NoPeriods),
//!   [`AlphanumericUnderscoreDash`](validators::AlphanumericUnderscoreDash)
//! - **Membership**: [`OneOf`](validators::OneOf),
//!   [`OneOfCaseInsensitive`](validators::OneOfCaseInsensitive)
//! - **Collection**: [`UniqueStringSet`](validators::UniqueStringSet)
//! - **Numeric**: [`GreaterThanZero`](validators::GreaterThanZero),
//!   [`PortNumber`](validators::PortNumber)
//! - **Network**: `Ipv6AddressOrCidr` (feature `network`)
//!
//! Every validator is a pure function of its input and its immutable
//! construction parameters, so validators are `Send + Sync` and can be
//! shared freely across threads.

// ValidationError is the single error type for all validators; boxing it
// would add indirection to every call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
pub mod validators;
