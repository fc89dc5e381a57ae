//! IPv6 address and CIDR validator.
//!
//! IPv6 text forms are irregular (compressed zero runs, embedded IPv4
//! suffixes), so parsing is delegated to `std::net` instead of a regex.
//! An input is accepted when it is either an IPv6 CIDR block
//! (`2001:db8::/32`) or a bare IPv6 address (`::1`). IPv4 and IPv4-mapped
//! IPv6 addresses (`::ffff:10.0.0.1`) are rejected as the wrong family.

use std::net::{IpAddr, Ipv6Addr};

use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// CIDR PARSING
// ============================================================================

/// Why a string is not a CIDR block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CidrParseError {
    /// No `/` separating address and prefix length.
    #[error("missing '/' prefix length separator")]
    MissingPrefix,

    /// The part before `/` is not an IP address.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    /// The prefix length is not a plain decimal number.
    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),

    /// The prefix length exceeds the address width.
    #[error("prefix length {prefix} exceeds {max} bits")]
    PrefixTooLong { prefix: u32, max: u8 },
}

/// Parses `address/prefix` CIDR notation.
///
/// The prefix length must be one or more decimal digits without a sign.
/// Leading zeros are allowed. It is at most 32 for IPv4 and 128 for IPv6.
/// Overlong digit runs saturate and are reported as too long.
///
/// ```
/// use std::net::IpAddr;
/// use tovalidate::validators::parse_cidr;
///
/// let (addr, prefix) = parse_cidr("2001:db8::/32").unwrap();
/// assert_eq!(addr, "2001:db8::".parse::<IpAddr>().unwrap());
/// assert_eq!(prefix, 32);
/// assert!(parse_cidr("10.0.0.0/33").is_err());
/// ```
pub fn parse_cidr(input: &str) -> Result<(IpAddr, u8), CidrParseError> {
    let (addr, prefix) = input.split_once('/').ok_or(CidrParseError::MissingPrefix)?;

    let addr: IpAddr = addr
        .parse()
        .map_err(|_| CidrParseError::InvalidAddress(addr.to_string()))?;

    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CidrParseError::InvalidPrefix(prefix.to_string()));
    }
    let prefix = prefix.bytes().fold(0_u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    });

    let max = match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    if prefix > u32::from(max) {
        return Err(CidrParseError::PrefixTooLong { prefix, max });
    }

    Ok((addr, prefix as u8))
}

/// True for IPv4 addresses and IPv4-mapped IPv6 addresses.
fn is_ipv4_family(addr: IpAddr) -> bool {
    match addr {
        IpAddr::V4(_) => true,
        IpAddr::V6(v6) => is_ipv4_mapped(v6),
    }
}

fn is_ipv4_mapped(addr: Ipv6Addr) -> bool {
    addr.to_ipv4_mapped().is_some()
}

// ============================================================================
// IPV6 ADDRESS OR CIDR VALIDATOR
// ============================================================================

/// Validates that a string is an IPv6 address or an IPv6 CIDR block.
///
/// ```
/// use tovalidate::foundation::{ErrorKind, Validate};
/// use tovalidate::validators::Ipv6AddressOrCidr;
///
/// assert!(Ipv6AddressOrCidr.validate("::1").is_ok());
/// assert!(Ipv6AddressOrCidr.validate("2001:db8::/32").is_ok());
///
/// let err = Ipv6AddressOrCidr.validate("10.0.0.0/8").unwrap_err();
/// assert!(err.is(ErrorKind::WrongAddressFamily));
///
/// let err = Ipv6AddressOrCidr.validate("not-an-ip").unwrap_err();
/// assert!(err.is(ErrorKind::MalformedInput));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ipv6AddressOrCidr;

impl Validate for Ipv6AddressOrCidr {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let cidr_error = match parse_cidr(input) {
            Ok((addr, _)) if is_ipv4_family(addr) => {
                tracing::trace!(value = input, code = "wrong_address_family", "rejected IPv4 CIDR");
                return Err(ValidationError::wrong_address_family(
                    "got IPv4 CIDR, IPv6 expected",
                    "ipv6",
                    "ipv4",
                ));
            }
            Ok(_) => return Ok(()),
            Err(e) => e,
        };

        match input.parse::<IpAddr>() {
            Ok(addr) if is_ipv4_family(addr) => {
                tracing::trace!(value = input, code = "wrong_address_family", "rejected IPv4 address");
                Err(ValidationError::wrong_address_family(
                    "got IPv4 address, IPv6 expected",
                    "ipv6",
                    "ipv4",
                ))
            }
            Ok(_) => Ok(()),
            Err(_) => {
                tracing::trace!(value = input, code = "malformed_input", cidr_error = %cidr_error, "unparseable address");
                Err(ValidationError::malformed_input(format!(
                    "unable to parse an IPv6 address or CIDR from: {input}"
                ))
                .with_param("value", input.to_string())
                .with_param("cidr_error", cidr_error.to_string()))
            }
        }
    }
}

/// Checks an optional string is an IPv6 address or CIDR. `None` passes.
///
/// ```
/// use tovalidate::validators::is_valid_ipv6_address_or_cidr;
///
/// assert!(is_valid_ipv6_address_or_cidr(Some("::1")).is_ok());
/// assert!(is_valid_ipv6_address_or_cidr(Some("192.168.0.1")).is_err());
/// assert!(is_valid_ipv6_address_or_cidr(None).is_ok());
/// ```
pub fn is_valid_ipv6_address_or_cidr(value: Option<&str>) -> ValidationResult<()> {
    match value {
        None => Ok(()),
        Some(s) => Ipv6AddressOrCidr.validate(s),
    }
}

// ============================================================================
// TESTS
// ============================================================================
