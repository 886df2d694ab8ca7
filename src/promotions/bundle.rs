//! Bundle Promotion
//!
//! A fixed price for every `n` units of one SKU, e.g. "3 for 130". Items are
//! fungible, so matching is a count: a tally holding `k` units matches
//! `k / n` times and leaves `k % n` for later promotions or unit pricing.

use std::num::NonZeroU32;

use smallvec::smallvec;

use crate::{
    basket::Tally,
    prices::Price,
    pricing::PricingError,
    promotions::{
        PromotionError, PromotionKey, applications::PromotionApplication, budget::PromotionBudget,
    },
    sku::Sku,
};

/// Quantity discount on a single SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePromotion {
    key: PromotionKey,
    quantity: NonZeroU32,
    sku: Sku,
    price: Price,
    budget: PromotionBudget,
}

impl BundlePromotion {
    /// Create a new bundle promotion charging `price` per `quantity` of `sku`.
    ///
    /// # Errors
    ///
    /// - [`PromotionError::ZeroQuantity`]: `quantity` is zero.
    pub fn new(
        key: PromotionKey,
        quantity: u32,
        sku: Sku,
        price: Price,
    ) -> Result<Self, PromotionError> {
        let quantity = NonZeroU32::new(quantity).ok_or(PromotionError::ZeroQuantity)?;

        Ok(Self {
            key,
            quantity,
            sku,
            price,
            budget: PromotionBudget::unlimited(),
        })
    }

    /// Limit how often this promotion can apply.
    #[must_use]
    pub fn with_budget(mut self, budget: PromotionBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Return the promotion key
    pub fn key(&self) -> PromotionKey {
        self.key
    }

    /// Units per bundle
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Bundled SKU
    pub fn sku(&self) -> Sku {
        self.sku
    }

    /// Price per bundle
    pub fn price(&self) -> Price {
        self.price
    }

    /// Budget
    pub fn budget(&self) -> &PromotionBudget {
        &self.budget
    }

    /// Consume every complete bundle from the tally.
    ///
    /// # Errors
    ///
    /// - [`PricingError::Overflow`]: the charge does not fit in a [`Price`]. The
    ///   tally is left untouched.
    pub fn apply(&self, tally: &mut Tally) -> Result<Option<PromotionApplication>, PricingError> {
        let bundles = self
            .budget
            .clamp(tally.count(self.sku) / self.quantity.get());

        if bundles == 0 {
            return Ok(None);
        }

        let price = self
            .price
            .checked_mul(u64::from(bundles))
            .ok_or(PricingError::Overflow)?;

        let consumed = tally.remove(self.sku, bundles * self.quantity.get());

        Ok(Some(PromotionApplication {
            promotion_key: self.key,
            matches: bundles,
            consumed: smallvec![(self.sku, consumed)],
            price,
        }))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::basket::Basket;

    use super::*;

    const A: Sku = Sku::new('a');

    fn three_for_130() -> Result<BundlePromotion, PromotionError> {
        BundlePromotion::new(PromotionKey::default(), 3, A, Price::new(130))
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert_eq!(
            BundlePromotion::new(PromotionKey::default(), 0, A, Price::new(10)),
            Err(PromotionError::ZeroQuantity)
        );
    }

    #[test]
    fn not_enough_items_leaves_tally_alone() -> TestResult {
        let mut tally = Basket::from("aa").tally();
        let before = tally.clone();

        assert_eq!(three_for_130()?.apply(&mut tally)?, None);
        assert_eq!(tally, before);

        Ok(())
    }

    #[test]
    fn exactly_one_bundle() -> TestResult {
        let mut tally = Basket::from("aaa").tally();

        let app = three_for_130()?.apply(&mut tally)?.ok_or("expected a match")?;

        assert_eq!(app.price, Price::new(130));
        assert_eq!(app.matches, 1);
        assert!(tally.is_empty());

        Ok(())
    }

    #[test]
    fn exactly_two_bundles() -> TestResult {
        let mut tally = Basket::from("aaaaaa").tally();

        let app = three_for_130()?.apply(&mut tally)?.ok_or("expected a match")?;

        assert_eq!(app.price, Price::new(260));
        assert!(tally.is_empty());

        Ok(())
    }

    #[test]
    fn remainder_is_left_unconsumed() -> TestResult {
        let mut tally = Basket::from("abaaaca").tally();

        let app = three_for_130()?.apply(&mut tally)?.ok_or("expected a match")?;

        assert_eq!(app.consumed.as_slice(), &[(A, 3)]);
        assert_eq!(tally.count(A), 2);
        assert_eq!(tally.len(), 4);

        Ok(())
    }

    #[test]
    fn scattered_items_still_match() -> TestResult {
        let mut tally = Basket::from("abacad").tally();

        let app = three_for_130()?.apply(&mut tally)?.ok_or("expected a match")?;

        assert_eq!(app.price, Price::new(130));
        assert_eq!(tally.count(A), 0);

        Ok(())
    }

    #[test]
    fn budget_caps_bundles() -> TestResult {
        let promotion = three_for_130()?.with_budget(PromotionBudget::with_application_limit(1));
        let mut tally = Basket::from("aaaaaaa").tally();

        let app = promotion.apply(&mut tally)?.ok_or("expected a match")?;

        assert_eq!(app.price, Price::new(130));
        assert_eq!(tally.count(A), 4);

        Ok(())
    }

    #[test]
    fn overflowing_charge_errors_and_leaves_tally_alone() -> TestResult {
        let promotion = BundlePromotion::new(PromotionKey::default(), 1, A, Price::new(u64::MAX))?;
        let mut tally = Basket::from("aaa").tally();
        let before = tally.clone();

        assert_eq!(promotion.apply(&mut tally), Err(PricingError::Overflow));
        assert_eq!(tally, before);

        Ok(())
    }
}
