//! Property-based tests for tovalidate.

use proptest::prelude::*;
use tovalidate::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn string_shapes_idempotent(s in ".*") {
        prop_assert_eq!(has_no_spaces(&s), has_no_spaces(&s));
        prop_assert_eq!(has_no_periods(&s), has_no_periods(&s));
        prop_assert_eq!(
            is_alphanumeric_underscore_dash(&s),
            is_alphanumeric_underscore_dash(&s)
        );
    }

    #[test]
    fn port_number_idempotent(n in any::<i64>()) {
        prop_assert_eq!(is_valid_port_number(Some(n)), is_valid_port_number(Some(n)));
    }
}

// ============================================================================
// PREDICATE / CHARACTER EQUIVALENCE
// ============================================================================

proptest! {
    #[test]
    fn no_spaces_iff_no_space_char(s in ".*") {
        prop_assert_eq!(has_no_spaces(&s), !s.chars().any(|c| c == ' '));
    }

    #[test]
    fn alphanumeric_underscore_dash_iff_charset(s in ".{0,20}") {
        let expected = !s.is_empty()
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        prop_assert_eq!(is_alphanumeric_underscore_dash(&s), expected);
    }

    #[test]
    fn generated_identifiers_pass(s in "[A-Za-z0-9_-]{1,32}") {
        prop_assert!(is_alphanumeric_underscore_dash(&s));
    }
}

// ============================================================================
// NUMERIC BOUNDS
// ============================================================================

proptest! {
    #[test]
    fn port_number_matches_bounds(n in any::<i64>()) {
        prop_assert_eq!(is_valid_port_number(Some(n)).is_ok(), n > 0 && n <= 65_535);
    }

    #[test]
    fn greater_than_zero_matches_sign(n in any::<f64>().prop_filter("not nan", |f| !f.is_nan())) {
        prop_assert_eq!(is_greater_than_zero(Some(n)).is_ok(), n > 0.0);
    }
}

// ============================================================================
// CASE INSENSITIVITY
// ============================================================================

proptest! {
    #[test]
    fn case_insensitive_membership_ignores_ascii_case(s in "[a-z]{1,12}") {
        let v = is_one_of_case_insensitive([s.clone()]);
        prop_assert!(v.matches(&s.to_ascii_uppercase()));
    }

    #[test]
    fn repeated_element_is_always_duplicate(s in "[a-z]{1,12}") {
        let v = unique_string_set::<String>([s.clone()]);
        let err = v.validate(&[Some(s.clone()), Some(s.to_ascii_uppercase())]).unwrap_err();
        prop_assert!(err.is(ErrorKind::DuplicateValue));
    }
}

// ============================================================================
// IPV6
// ============================================================================

#[cfg(feature = "network")]
mod network {
    use super::*;

    proptest! {
        #[test]
        fn ipv6_idempotent(s in ".{0,40}") {
            prop_assert_eq!(
                is_valid_ipv6_address_or_cidr(Some(s.as_str())),
                is_valid_ipv6_address_or_cidr(Some(s.as_str()))
            );
        }

        #[test]
        fn ipv6_addresses_always_pass(segments in prop::array::uniform8(any::<u16>())) {
            let addr = std::net::Ipv6Addr::from(segments);
            prop_assume!(addr.to_ipv4_mapped().is_none());
            let text = addr.to_string();
            prop_assert!(is_valid_ipv6_address_or_cidr(Some(text.as_str())).is_ok());
            let cidr = format!("{text}/64");
            prop_assert!(is_valid_ipv6_address_or_cidr(Some(cidr.as_str())).is_ok());
        }
    }
}
