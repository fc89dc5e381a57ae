use serde_json::json;
use tovalidate::foundation::{ErrorKind, Validate};
use tovalidate::json;
use tovalidate::validators::{NoSpaces, is_one_of_case_insensitive};

#[test]
fn numeric_fields_from_json_document() {
    let server = json!({"port": 8080, "weight": 0.5, "tcp_port": null});
    assert!(json::is_valid_port_number(&server["port"]).is_ok());
    assert!(json::is_greater_than_zero(&server["weight"]).is_ok());
    assert!(json::is_valid_port_number(&server["tcp_port"]).is_ok());
    // missing keys index to null
    assert!(json::is_valid_port_number(&server["https_port"]).is_ok());
}

#[test]
fn wrong_json_type_is_type_mismatch() {
    let err = json::is_greater_than_zero(&json!("5")).unwrap_err();
    assert!(err.is(ErrorKind::TypeMismatch));
    assert_eq!(err.param("expected"), Some("number"));
    assert_eq!(err.param("actual"), Some("string"));
}

#[cfg(feature = "network")]
#[test]
fn ipv6_from_json() {
    assert!(json::is_valid_ipv6_address_or_cidr(&json!("2001:db8::/32")).is_ok());
    assert!(
        json::is_valid_ipv6_address_or_cidr(&json!({"addr": "::1"}))
            .unwrap_err()
            .is(ErrorKind::TypeMismatch)
    );
}

#[test]
fn unique_string_set_from_json() {
    let v = json::unique_string_set(["red", "blue"]);
    assert!(v.validate(&json!(["Red", null, "blue"])).is_ok());
    assert!(v.validate(&json!(null)).is_ok());
    assert!(
        v.validate(&json!(["red", "Red"]))
            .unwrap_err()
            .is(ErrorKind::DuplicateValue)
    );
    assert!(
        v.validate(&json!({"0": "red"}))
            .unwrap_err()
            .is(ErrorKind::TypeMismatch)
    );
}

#[test]
fn string_validators_accept_json_strings() {
    assert!(NoSpaces.validate_any(&json!("abc")).is_ok());
    assert!(
        is_one_of_case_insensitive(["ALL"])
            .validate_any(&json!("all"))
            .is_ok()
    );
    assert!(
        NoSpaces
            .validate_any(&json!(null))
            .unwrap_err()
            .is(ErrorKind::TypeMismatch)
    );
}

#[test]
fn unique_string_set_reports_first_failure_in_order() {
    let v = json::unique_string_set(["red", "blue"]);
    assert!(
        v.validate(&json!(["red", "RED", 1]))
            .unwrap_err()
            .is(ErrorKind::DuplicateValue)
    );
    assert!(
        v.validate(&json!([1, "red", "RED"]))
            .unwrap_err()
            .is(ErrorKind::TypeMismatch)
    );
}
