//! `use tovalidate::prelude::*` brings in everything needed for common checks.

use tovalidate::prelude::*;

#[test]
fn prelude_provides_traits_and_validators() {
    let v = NoSpaces.and(AlphanumericUnderscoreDash);
    assert!(v.validate("edge_01").is_ok());
    assert!(v.validate("edge 01").is_err());
}

#[test]
fn prelude_provides_combinator_functions() {
    let v = or(is_one_of(["a"]), not(NoPeriods));
    assert!(v.validate("a").is_ok());
    assert!(v.validate("x.y").is_ok());
    assert!(v.validate("b").is_err());
}

#[test]
fn prelude_provides_error_kind() {
    let err: ValidationError = is_valid_port_number(Some(0)).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::OutOfRange));
}
