use super::{Amount, AmountError};
use anyhow::{anyhow, Result};
use std::str::FromStr;

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.0"),
        ("42.50", "42.50"),
        ("0.0001", "0.0001"),
        ("-1.5", "-1.5"),
        ("  12.5  ", "12.5"),
        ("+1.25", "1.25"),
        ("100", "100"),
        ("1e3", "1000"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Amount::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(Amount::from_str("abc").is_err());
    assert!(Amount::from_str("1.2.3").is_err());
    assert!(Amount::from_str("").is_err());
    assert!(Amount::from_str("   ").is_err());
    assert!(Amount::from_str("NaN").is_err());
    assert!(Amount::from_str("inf").is_err());
    assert!(Amount::from_str("12 dollars").is_err());
}

#[test]
fn test_amount_reports_out_of_range_values_as_overflow() {
    let result = Amount::from_str("99999999999999999999999999999999999999");

    assert!(matches!(result, Err(AmountError::Overflow)));
}

#[test]
fn test_amount_reports_out_of_range_scientific_values_as_overflow() {
    assert!(matches!(Amount::from_str("1e30"), Err(AmountError::Overflow)));
    assert!(matches!(Amount::from_str("1e-40"), Err(AmountError::Overflow)));
    assert!(matches!(Amount::from_str("1e400"), Err(AmountError::Overflow)));
    assert!(matches!(Amount::from_str("123456789012345678901234567890.5"), Err(AmountError::Overflow)));
}

#[test]
fn test_amount_rejects_digits_that_would_be_rounded() {
    let result = Amount::from_str("0.12345678901234567890123456789012");

    assert!(matches!(result, Err(AmountError::Precision)));
}

#[test]
fn test_amount_keeps_every_digit_it_accepts() -> Result<()> {
    let value = "0.1234567890123456789012345678";

    assert_eq!(Amount::from_str(value)?.to_string(), value);

    Ok(())
}

#[test]
fn test_amount_addition_is_exact() -> Result<()> {
    let mut total = Amount::new();

    for _ in 0..10 {
        total = total.checked_add(Amount::from_str("0.1")?).ok_or_else(|| anyhow!("Unexpected overflow"))?;
    }

    assert_eq!(total, Amount::from_str("1")?);
    assert!(!total.is_negative());

    total = total.checked_add(Amount::from_str("-3.5")?).ok_or_else(|| anyhow!("Unexpected overflow"))?;

    assert_eq!(total.to_string(), "-2.5");
    assert!(total.is_negative());

    Ok(())
}

#[test]
fn test_amount_equality_ignores_scale() -> Result<()> {
    assert_eq!(Amount::from_str("15")?, Amount::from_str("15.00")?);
    assert!(Amount::from_str("0.00")?.is_zero());

    Ok(())
}

#[test]
fn test_amount_checked_add_detects_overflow() -> Result<()> {
    let maximum = Amount::from_str("79228162514264337593543950335")?;

    assert!(maximum.checked_add(Amount::from_str("1")?).is_none());
    assert_eq!(maximum.checked_add(Amount::from_str("-1")?), Some(Amount::from_str("79228162514264337593543950334")?));

    Ok(())
}
