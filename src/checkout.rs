//! Checkout
//!
//! Prices a basket under an ordered list of promotions. Each promotion runs
//! once, in list order, against the same working tally, so earlier
//! promotions get first pick of any SKUs they share with later ones. There
//! is no search for a cheaper assignment: the caller decides precedence by
//! ordering the list. Whatever is left afterwards is charged at unit price.

use tracing::debug;

use crate::{
    basket::Basket,
    prices::Price,
    pricing::{PriceTable, PricingError},
    promotions::Promotion,
    receipt::Receipt,
};

/// Checkout against a fixed price table.
#[derive(Debug, Clone, Copy)]
pub struct Checkout<'a> {
    prices: &'a PriceTable,
}

impl<'a> Checkout<'a> {
    /// Create a checkout using `prices` for unit pricing.
    pub fn new(prices: &'a PriceTable) -> Self {
        Self { prices }
    }

    /// The price table in use.
    pub fn prices(&self) -> &'a PriceTable {
        self.prices
    }

    /// Price every item at its unit price.
    ///
    /// # Errors
    ///
    /// - [`PricingError::UnknownSku`]: an item has no unit price.
    /// - [`PricingError::Overflow`]: the total does not fit in a [`Price`].
    #[tracing::instrument(name = "checkout.total", skip_all, fields(items = basket.len()), err)]
    pub fn total(&self, basket: &Basket) -> Result<Price, PricingError> {
        self.prices.charge(&basket.tally())
    }

    /// Apply one promotion, then price the rest at unit prices.
    ///
    /// # Errors
    ///
    /// - [`PricingError::UnknownSku`]: a remaining item has no unit price.
    /// - [`PricingError::Overflow`]: the total does not fit in a [`Price`].
    #[tracing::instrument(
        name = "checkout.total_with_promotion",
        skip_all,
        fields(items = basket.len()),
        err
    )]
    pub fn total_with_promotion(
        &self,
        basket: &Basket,
        promotion: &Promotion,
    ) -> Result<Price, PricingError> {
        self.total_with_promotions(basket, std::slice::from_ref(promotion))
    }

    /// Apply each promotion in order, then price the rest at unit prices.
    ///
    /// # Errors
    ///
    /// - [`PricingError::UnknownSku`]: a remaining item has no unit price.
    /// - [`PricingError::Overflow`]: the total does not fit in a [`Price`].
    #[tracing::instrument(
        name = "checkout.total_with_promotions",
        skip_all,
        fields(items = basket.len(), promotions = promotions.len()),
        err
    )]
    pub fn total_with_promotions(
        &self,
        basket: &Basket,
        promotions: &[Promotion],
    ) -> Result<Price, PricingError> {
        let mut tally = basket.tally();
        let mut discounted = Price::ZERO;

        for promotion in promotions {
            let price = promotion.apply(&mut tally)?;
            debug!(promotion_key = ?promotion.key(), %price, "applied promotion");

            discounted = discounted.checked_add(price).ok_or(PricingError::Overflow)?;
        }

        discounted
            .checked_add(self.prices.charge(&tally)?)
            .ok_or(PricingError::Overflow)
    }

    /// Apply each promotion in order and itemise the result.
    ///
    /// Unlike the totals, the receipt's subtotal needs a unit price for every
    /// item, including those a promotion consumes. A basket holding a SKU
    /// with no unit price therefore has no receipt even when
    /// [`Checkout::total_with_promotions`] can price it. Whenever a receipt is
    /// produced, its total equals that method's result.
    ///
    /// # Errors
    ///
    /// - [`PricingError::UnknownSku`]: an item has no unit price.
    /// - [`PricingError::Overflow`]: a total does not fit in a [`Price`].
    #[tracing::instrument(
        name = "checkout.receipt",
        skip_all,
        fields(items = basket.len(), promotions = promotions.len()),
        err
    )]
    pub fn receipt(
        &self,
        basket: &Basket,
        promotions: &[Promotion],
    ) -> Result<Receipt, PricingError> {
        let subtotal = self.total(basket)?;
        let mut tally = basket.tally();

        let mut applications = Vec::new();

        for promotion in promotions {
            let Some(application) = promotion.apply_with_application(&mut tally)? else {
                continue;
            };

            debug!(
                promotion_key = ?application.promotion_key,
                matches = application.matches,
                price = %application.price,
                "applied promotion"
            );

            applications.push(application);
        }

        let total = applications
            .iter()
            .try_fold(self.prices.charge(&tally)?, |total, app| {
                total.checked_add(app.price).ok_or(PricingError::Overflow)
            })?;

        Ok(Receipt::new(applications, tally, subtotal, total))
    }
}
