use rstest::rstest;
use tovalidate::foundation::{ErrorKind, Validate, ValidateExt};
use tovalidate::validators::{Number, is_greater_than_zero, is_valid_port_number, port_number};

#[test]
fn greater_than_zero_examples() {
    assert!(is_greater_than_zero(Some(0)).unwrap_err().is(ErrorKind::OutOfRange));
    assert!(is_greater_than_zero(None::<i64>).is_ok());
    assert!(is_greater_than_zero(Some(5)).is_ok());
}

#[test]
fn port_number_examples() {
    assert!(is_valid_port_number(Some(70_000)).unwrap_err().is(ErrorKind::OutOfRange));
    assert!(is_valid_port_number(Some(443)).is_ok());
    assert!(is_valid_port_number(Some(0)).unwrap_err().is(ErrorKind::OutOfRange));
}

#[rstest]
#[case(Some(1.0), true)]
#[case(Some(-1.0), false)]
#[case(Some(1e-9), true)]
#[case(None, true)]
fn greater_than_zero_floats(#[case] input: Option<f64>, #[case] ok: bool) {
    assert_eq!(is_greater_than_zero(input).is_ok(), ok);
}

#[rstest]
#[case(Some(65_535_u32), true)]
#[case(Some(65_536_u32), false)]
#[case(None, true)]
fn port_number_unsigned(#[case] input: Option<u32>, #[case] ok: bool) {
    assert_eq!(is_valid_port_number(input).is_ok(), ok);
}

#[test]
fn optional_port_field() {
    let port = port_number().optional();
    let fields: [Option<Number>; 3] = [None, Some(Number::Int(80)), Some(Number::Int(0))];
    let results: Vec<bool> = fields.iter().map(|f| port.validate(f).is_ok()).collect();
    assert_eq!(results, [true, true, false]);
}
