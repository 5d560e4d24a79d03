use crate::types::errors::MonetaryError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Neg;
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// A currency amount with at most two decimal places.
///
/// Balances may be negative (current accounts run into overdraft), so the
/// sign is part of the value. Arithmetic is checked and never wraps.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    /// Builds an amount from a count of minor units, e.g. `50000` is `500.00`.
    pub fn from_cents(cents: i64) -> Self {
        Monetary(Decimal::new(cents, DECIMAL_PLACES))
    }

    /// Parses a persisted balance.
    ///
    /// Unlike [`FromStr`], any number of decimal places and scientific
    /// notation (`1.5e+06`) are accepted, and the value is rounded half away
    /// from zero to two places.
    pub fn from_record_str(value: &str) -> Result<Self, MonetaryError> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let parsed = if value.contains(['e', 'E']) {
            Decimal::from_scientific(value)
        } else {
            Decimal::from_str(value)
        };

        let decimal = parsed.map_err(|error| {
            MonetaryError::InvalidFormat(format!("Value [{value}] is not a number: {error}"))
        })?;

        let mut rounded = decimal.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

        //NOTE: "-0.004" rounds to zero and must not print as "-0.00"
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }

        Ok(Monetary(rounded))
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_sub(rhs.0).map(Monetary)
    }
}

impl Neg for Monetary {
    type Output = Monetary;

    fn neg(self) -> Self::Output {
        Monetary(-self.0)
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.prec$}", self.0, prec = DECIMAL_PLACES as usize)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str(value).map_err(|error| {
            MonetaryError::InvalidFormat(format!("Value [{value}] is not a number: {error}"))
        })?;

        //NOTE: "1.50" and "1.500" are the same amount, only significant places count
        let decimal = decimal.normalize();

        if decimal.scale() > DECIMAL_PLACES {
            return Err(MonetaryError::TooManyDecimalPlaces(value.to_string()));
        }

        Ok(Monetary(decimal))
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        //NOTE: Only records are deserialized, operator input goes through `FromStr`
        let value = String::deserialize(deserializer)?;
        Monetary::from_record_str(&value).map_err(de::Error::custom)
    }
}
