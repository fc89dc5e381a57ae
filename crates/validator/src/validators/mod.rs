//! Built-in validators
//!
//! # Categories
//!
//! - **String shape**: no spaces, no periods, `[A-Za-z0-9_-]+`
//! - **Membership**: exact and case-insensitive "is one of"
//! - **Collection**: case-insensitive unique membership
//! - **Numeric**: greater than zero, port number
//! - **Network**: IPv6 address or CIDR
//!
//! ```
//! use tovalidate::prelude::*;
//!
//! let cache_group = NoSpaces.and(AlphanumericUnderscoreDash);
//! assert!(cache_group.validate("mid-tier_1").is_ok());
//!
//! let protocol = is_one_of_case_insensitive(["http", "https"]);
//! assert!(protocol.validate("HTTPS").is_ok());
//! ```

pub mod membership;
pub mod numeric;
pub mod string;
pub mod unique;

#[cfg(feature = "network")]
pub mod network;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use string::{
    AlphanumericUnderscoreDash, NoPeriods, NoSpaces, alphanumeric_underscore_dash,
    has_no_periods, has_no_spaces, is_alphanumeric_underscore_dash, no_periods, no_spaces,
};

pub use membership::{AllowedSet, OneOf, OneOfCaseInsensitive, is_one_of, is_one_of_case_insensitive};

pub use unique::{UniqueStringSet, unique_string_set};

pub use numeric::{
    GreaterThanZero, MAX_PORT, Number, PortNumber, greater_than_zero, is_greater_than_zero,
    is_valid_port_number, port_number,
};

#[cfg(feature = "network")]
pub use network::{CidrParseError, Ipv6AddressOrCidr, is_valid_ipv6_address_or_cidr, parse_cidr};
