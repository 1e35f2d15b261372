use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A signed, exact decimal quantity of money.
///
/// The scale the value was entered with is kept, so `42.50` is written back
/// to disk as `42.50` and not as `42.5`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new() -> Self {
        Amount(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, formatter)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        if let Ok(decimal) = Decimal::from_str(value) {
            //NOTE: Digits past the supported scale are rounded by the parser, which would not round-trip
            let fraction_digits = value.split_once('.')
                .map_or(0, |(_, fraction)| fraction.chars().filter(char::is_ascii_digit).count());

            if fraction_digits > decimal.scale() as usize {
                return Err(AmountError::Precision);
            }

            return Ok(Amount(decimal));
        }

        //NOTE: Plain notation is tried first so the entered scale survives; exponents are the fallback
        if value.contains(['e', 'E']) {
            if let Ok(decimal) = Decimal::from_scientific(value) {
                return Ok(Amount(decimal));
            }
        }

        //NOTE: `inf` and `NaN` parse as floats but carry no digits, anything else numeric is out of range
        if value.parse::<f64>().is_ok_and(|parsed| parsed.is_finite() || value.contains(|c: char| c.is_ascii_digit())) {
            return Err(AmountError::Overflow);
        }

        Err(AmountError::InvalidFormat(format!("Value is not a number: '{value}'")))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Amount::from_str(&value).map_err(de::Error::custom)
    }
}
