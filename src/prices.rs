//! Prices

use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors converting raw amounts into prices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// Prices can't be below zero.
    #[error("price {0} is negative")]
    Negative(i64),
}

/// Represents a price in pence/cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A price of nothing.
    pub const ZERO: Price = Price { value: 0 };

    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Adds `other`, or `None` if the sum overflows.
    #[must_use]
    pub const fn checked_add(self, other: Price) -> Option<Price> {
        match self.value.checked_add(other.value) {
            Some(value) => Some(Price::new(value)),
            None => None,
        }
    }

    /// Multiplies by a quantity, or `None` if the product overflows.
    #[must_use]
    pub const fn checked_mul(self, quantity: u64) -> Option<Price> {
        match self.value.checked_mul(quantity) {
            Some(value) => Some(Price::new(value)),
            None => None,
        }
    }

    /// Subtracts `other`, clamping at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Price) -> Price {
        Price::new(self.value.saturating_sub(other.value))
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl TryFrom<i64> for Price {
    type Error = PriceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Price::new)
            .map_err(|_err| PriceError::Negative(value))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(1000);

        assert_eq!(price.value, 1000);
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price { value: 100 };

        assert_eq!(*price, 100);
    }

    #[test]
    fn try_from_rejects_negative_amounts() {
        assert_eq!(Price::try_from(-1), Err(PriceError::Negative(-1)));
        assert_eq!(Price::try_from(0), Ok(Price::ZERO));
        assert_eq!(Price::try_from(130), Ok(Price::new(130)));
    }

    #[test]
    fn checked_arithmetic() {
        let price = Price::new(45).checked_mul(2).and_then(|p| p.checked_add(Price::new(30)));

        assert_eq!(price, Some(Price::new(120)));
        assert_eq!(Price::new(5).saturating_sub(Price::new(120)), Price::ZERO);
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let max = Price::new(u64::MAX);

        assert_eq!(max.checked_add(Price::new(1)), None);
        assert_eq!(max.checked_mul(2), None);
        assert_eq!(max.checked_mul(1), Some(max));
        assert_eq!(max.checked_mul(0), Some(Price::ZERO));
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:>5}", Price::new(130)), "  130");
    }
}
