//! Promotion Applications

use smallvec::SmallVec;

use crate::{
    prices::Price,
    pricing::{PriceTable, PricingError},
    promotions::PromotionKey,
    sku::Sku,
};

/// Result of applying a promotion to a tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionApplication {
    /// Key of the promotion that was applied
    pub promotion_key: PromotionKey,

    /// Number of times the promotion matched
    pub matches: u32,

    /// Items consumed, as `(sku, count)`
    pub consumed: SmallVec<[(Sku, u32); 2]>,

    /// Total charged for everything consumed
    pub price: Price,
}

impl PromotionApplication {
    /// Number of items consumed.
    pub fn item_count(&self) -> u32 {
        self.consumed.iter().map(|&(_, count)| count).sum()
    }

    /// What the consumed items would have cost at unit prices.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnknownSku`] if a consumed SKU has no unit price,
    /// or [`PricingError::Overflow`] if the total does not fit in a [`Price`].
    pub fn original_price(&self, prices: &PriceTable) -> Result<Price, PricingError> {
        self.consumed
            .iter()
            .try_fold(Price::ZERO, |total, &(sku, count)| {
                total
                    .checked_add(prices.line_price(sku, count)?)
                    .ok_or(PricingError::Overflow)
            })
    }

    /// Savings against unit prices, zero if the promotion costs more.
    ///
    /// # Errors
    ///
    /// As [`PromotionApplication::original_price`].
    pub fn savings(&self, prices: &PriceTable) -> Result<Price, PricingError> {
        Ok(self.original_price(prices)?.saturating_sub(self.price))
    }
}
