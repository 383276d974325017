//! Value objects: equality by value, not identity.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Marker trait for value objects.
///
/// Value objects have no identity. They are immutable and two instances with
/// the same attributes are interchangeable, unlike an [`Entity`](crate::Entity).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Non-negative decimal price of an item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Create a price, rejecting negative amounts.
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {amount})"
            )));
        }
        Ok(Self(amount))
    }

    /// Price from an integer mantissa and a decimal scale, e.g. `(15, 1)` is `1.5`.
    pub fn from_parts(mantissa: i64, scale: u32) -> Result<Self, DomainError> {
        Self::new(Decimal::new(mantissa, scale))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::validation(format!("price: {e}")))?;
        Self::new(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_zero_and_positive_amounts() {
        assert_eq!(Price::from_parts(0, 0).unwrap(), Price::ZERO);
        let price: Price = "1.50".parse().unwrap();
        assert_eq!(price, Price::from_parts(15, 1).unwrap());
    }

    #[test]
    fn rejects_negative_amounts() {
        match Price::from_parts(-1, 2).unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("negative")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert!("-0.3".parse::<Price>().is_err());
    }

    #[test]
    fn deserialization_enforces_non_negative() {
        assert!(serde_json::from_str::<Price>("\"-2.0\"").is_err());
        let price: Price = serde_json::from_str("\"2.0\"").unwrap();
        assert_eq!(price.amount(), Decimal::new(20, 1));
    }

    proptest! {
        /// Property: every non-negative mantissa yields a price with the same amount.
        #[test]
        fn non_negative_amounts_round_trip(mantissa in 0i64..10_000_000, scale in 0u32..6) {
            let price = Price::from_parts(mantissa, scale).unwrap();
            prop_assert_eq!(price.amount(), Decimal::new(mantissa, scale));
        }
    }
}
