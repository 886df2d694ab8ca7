//! Pair Promotion
//!
//! A fixed price for one unit each of two different SKUs, e.g. "c and d
//! together for 30". Matching is by presence, not position, so `"cd"` and
//! `"dc"` price the same.

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

/// Combo discount across two distinct SKUs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairPromotion {
    key: PromotionKey,
    first: Sku,
    second: Sku,
    price: Price,
    budget: PromotionBudget,
}

impl PairPromotion {
    /// Create a new pair promotion charging `price` for one `first` plus one `second`.
    ///
    /// # Errors
    ///
    /// - [`PromotionError::IdenticalSkus`]: `first` and `second` are the same SKU.
    pub fn new(
        key: PromotionKey,
        first: Sku,
        second: Sku,
        price: Price,
    ) -> Result<Self, PromotionError> {
        if first == second {
            return Err(PromotionError::IdenticalSkus(first));
        }

        Ok(Self {
            key,
            first,
            second,
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

    /// The paired SKUs
    pub fn skus(&self) -> (Sku, Sku) {
        (self.first, self.second)
    }

    /// Price per pair
    pub fn price(&self) -> Price {
        self.price
    }

    /// Budget
    pub fn budget(&self) -> &PromotionBudget {
        &self.budget
    }

    /// Consume as many pairs as the tally holds.
    ///
    /// # Errors
    ///
    /// - [`PricingError::Overflow`]: the charge does not fit in a [`Price`]. The
    ///   tally is left untouched.
    pub fn apply(&self, tally: &mut Tally) -> Result<Option<PromotionApplication>, PricingError> {
        let pairs = self
            .budget
            .clamp(tally.count(self.first).min(tally.count(self.second)));

        if pairs == 0 {
            return Ok(None);
        }

        let price = self
            .price
            .checked_mul(u64::from(pairs))
            .ok_or(PricingError::Overflow)?;

        let first = tally.remove(self.first, pairs);
        let second = tally.remove(self.second, pairs);

        Ok(Some(PromotionApplication {
            promotion_key: self.key,
            matches: pairs,
            consumed: smallvec![(self.first, first), (self.second, second)],
            price,
        }))
    }
}
