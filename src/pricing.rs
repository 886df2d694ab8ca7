//! Pricing
//!
//! Unit prices for every SKU the shop sells, and the full-price charge for
//! whatever a basket or tally still holds.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::warn;

use crate::{
    basket::{Basket, Tally},
    prices::Price,
    sku::Sku,
};

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The SKU has no entry in the price table.
    #[error("unknown SKU {0}")]
    UnknownSku(Sku),

    /// A total too large to represent.
    #[error("price overflow")]
    Overflow,
}

/// Unit price per SKU.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: FxHashMap<Sku, Price>,
}

impl PriceTable {
    /// Create an empty price table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unit price for a SKU, replacing any previous price.
    pub fn insert(&mut self, sku: Sku, price: Price) -> Option<Price> {
        self.prices.insert(sku, price)
    }

    /// Look up the unit price of one SKU.
    ///
    /// # Errors
    ///
    /// - [`PricingError::UnknownSku`]: the SKU is not in the table.
    pub fn unit_price(&self, sku: Sku) -> Result<Price, PricingError> {
        self.prices.get(&sku).copied().ok_or_else(|| {
            warn!(%sku, "no unit price for SKU");
            PricingError::UnknownSku(sku)
        })
    }

    /// Unit price of `sku` times `count`.
    ///
    /// # Errors
    ///
    /// - [`PricingError::UnknownSku`]: the SKU is not in the table.
    /// - [`PricingError::Overflow`]: the line total does not fit in a [`Price`].
    pub fn line_price(&self, sku: Sku, count: u32) -> Result<Price, PricingError> {
        self.unit_price(sku)?
            .checked_mul(u64::from(count))
            .ok_or(PricingError::Overflow)
    }

    /// Price every remaining item in a tally at its unit price.
    ///
    /// # Errors
    ///
    /// - [`PricingError::UnknownSku`]: some SKU in the tally is not in the table.
    /// - [`PricingError::Overflow`]: the total does not fit in a [`Price`].
    pub fn charge(&self, tally: &Tally) -> Result<Price, PricingError> {
        tally.iter().try_fold(Price::ZERO, |total, (sku, count)| {
            total
                .checked_add(self.line_price(sku, count)?)
                .ok_or(PricingError::Overflow)
        })
    }

    /// Iterate over `(sku, unit price)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Sku, Price)> + '_ {
        self.prices.iter().map(|(&sku, &price)| (sku, price))
    }

    /// Number of SKUs priced.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(Sku, Price)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (Sku, Price)>>(iter: I) -> Self {
        PriceTable {
            prices: iter.into_iter().collect(),
        }
    }
}

/// Calculates the total unit price of a basket, with no promotions.
///
/// # Errors
///
/// - [`PricingError::UnknownSku`]: some item in the basket is not in the table.
/// - [`PricingError::Overflow`]: the total does not fit in a [`Price`].
pub fn total_price(prices: &PriceTable, basket: &Basket) -> Result<Price, PricingError> {
    basket.iter().try_fold(Price::ZERO, |total, sku| {
        total
            .checked_add(prices.unit_price(sku)?)
            .ok_or(PricingError::Overflow)
    })
}
