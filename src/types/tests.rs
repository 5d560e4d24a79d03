use super::errors::MonetaryError;
use super::Monetary;
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_monetary_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1", "1.00"),
        ("1.5", "1.50"),
        ("0.01", "0.01"),
        ("-1.5", "-1.50"),
        ("  100.25  ", "100.25"),
        ("-400", "-400.00"),
        ("2.500", "2.50"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_fails_to_parse_invalid_strings() {
    assert!(matches!(Monetary::from_str("1.234"), Err(MonetaryError::TooManyDecimalPlaces(_))));
    assert!(matches!(Monetary::from_str("abc"), Err(MonetaryError::InvalidFormat(_))));
    assert!(matches!(Monetary::from_str("1.2.3"), Err(MonetaryError::InvalidFormat(_))));
    assert!(matches!(Monetary::from_str(""), Err(MonetaryError::InvalidFormat(_))));
    assert!(matches!(Monetary::from_str("   "), Err(MonetaryError::InvalidFormat(_))));
}

#[test]
fn test_record_balances_accept_any_precision_and_scientific_notation() -> Result<()> {
    let test_cases = vec![
        ("12.345", "12.35"),
        ("-12.345", "-12.35"),
        ("0.004", "0.00"),
        ("-0.004", "0.00"),
        ("-7.5", "-7.50"),
        ("1.5e+06", "1500000.00"),
        ("2.5E-3", "0.00"),
        ("1.25e1", "12.50"),
        (" 100 ", "100.00"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_record_str(input_string)?.to_string(), expected_output);
    }

    assert!(matches!(Monetary::from_record_str("lots"), Err(MonetaryError::InvalidFormat(_))));
    assert!(matches!(Monetary::from_record_str(""), Err(MonetaryError::InvalidFormat(_))));
    assert!(matches!(Monetary::from_str("12.345"), Err(MonetaryError::TooManyDecimalPlaces(_))));

    Ok(())
}

#[test]
fn test_monetary_supports_checked_addition_and_subtraction() -> Result<()> {
    let value = Monetary::from_str("1.5")?;
    let sum = value.checked_add(Monetary::from_str("2.5")?);

    assert_eq!(sum, Some(Monetary::from_str("4")?));

    let difference = Monetary::from_str("4")?.checked_sub(Monetary::from_str("5")?);

    assert_eq!(difference, Some(Monetary::from_str("-1")?));

    Ok(())
}

#[test]
fn test_monetary_sign_queries() -> Result<()> {
    assert!(Monetary::from_str("-0.01")?.is_negative());
    assert!(Monetary::from_str("0.01")?.is_positive());

    let zero = Monetary::default();

    assert_eq!(zero, Monetary::from_cents(0));
    assert!(!zero.is_negative());
    assert!(!zero.is_positive());

    Ok(())
}

#[test]
fn test_monetary_negation_and_cents_constructor() -> Result<()> {
    let limit = Monetary::from_cents(50_000);

    assert_eq!(limit.to_string(), "500.00");
    assert_eq!((-limit).to_string(), "-500.00");
    assert!(Monetary::from_str("-600")? < -limit);

    Ok(())
}
