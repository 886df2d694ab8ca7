//! Promotions

use slotmap::new_key_type;
use thiserror::Error;

use crate::{
    basket::Tally,
    prices::{Price, PriceError},
    pricing::PricingError,
    promotions::{
        applications::PromotionApplication, budget::PromotionBudget, bundle::BundlePromotion,
        pair::PairPromotion,
    },
    sku::Sku,
};

pub mod applications;
pub mod budget;
pub mod bundle;
pub mod pair;

new_key_type! {
    /// Promotion Key
    pub struct PromotionKey;
}

/// Errors for promotions that can never be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromotionError {
    /// A bundle of zero items.
    #[error("bundle quantity must be at least 1")]
    ZeroQuantity,

    /// A quantity below one supplied from configuration.
    #[error("bundle quantity must be at least 1, got {0}")]
    NonPositiveQuantity(i64),

    /// A pair promotion naming the same SKU twice.
    #[error("pair promotion needs two different SKUs, got {0} twice")]
    IdenticalSkus(Sku),

    /// An invalid promotion price.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// Promotion metadata
#[derive(Debug, Default)]
pub struct PromotionMeta {
    /// Promotion name
    pub name: String,
}

/// Promotion enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Promotion {
    /// N items of one SKU for a fixed price
    Bundle(BundlePromotion),

    /// One each of two SKUs for a fixed price
    Pair(PairPromotion),
}

impl Promotion {
    /// Build a bundle promotion from raw configuration values.
    ///
    /// # Errors
    ///
    /// - [`PromotionError::NonPositiveQuantity`]: `quantity` is below one.
    /// - [`PromotionError::Price`]: `price` is negative.
    pub fn bundle(
        key: PromotionKey,
        quantity: i64,
        sku: Sku,
        price: i64,
    ) -> Result<Self, PromotionError> {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|&quantity| quantity > 0)
            .ok_or(PromotionError::NonPositiveQuantity(quantity))?;

        Ok(Promotion::Bundle(BundlePromotion::new(
            key,
            quantity,
            sku,
            Price::try_from(price)?,
        )?))
    }

    /// Build a pair promotion from raw configuration values.
    ///
    /// # Errors
    ///
    /// - [`PromotionError::IdenticalSkus`]: `first` and `second` are the same.
    /// - [`PromotionError::Price`]: `price` is negative.
    pub fn pair(
        key: PromotionKey,
        first: Sku,
        second: Sku,
        price: i64,
    ) -> Result<Self, PromotionError> {
        Ok(Promotion::Pair(PairPromotion::new(
            key,
            first,
            second,
            Price::try_from(price)?,
        )?))
    }

    /// Return the promotion key.
    pub fn key(&self) -> PromotionKey {
        match self {
            Promotion::Bundle(bundle) => bundle.key(),
            Promotion::Pair(pair) => pair.key(),
        }
    }

    /// Return the promotion budget.
    pub fn budget(&self) -> &PromotionBudget {
        match self {
            Promotion::Bundle(bundle) => bundle.budget(),
            Promotion::Pair(pair) => pair.budget(),
        }
    }

    /// Replace the promotion budget.
    #[must_use]
    pub fn with_budget(self, budget: PromotionBudget) -> Self {
        match self {
            Promotion::Bundle(bundle) => Promotion::Bundle(bundle.with_budget(budget)),
            Promotion::Pair(pair) => Promotion::Pair(pair.with_budget(budget)),
        }
    }

    /// Consume every match from the tally and return the discounted price
    /// charged for them. No match leaves the tally as it was and costs nothing.
    ///
    /// # Errors
    ///
    /// - [`PricingError::Overflow`]: the charge does not fit in a [`Price`].
    pub fn apply(&self, tally: &mut Tally) -> Result<Price, PricingError> {
        Ok(self
            .apply_with_application(tally)?
            .map_or(Price::ZERO, |application| application.price))
    }

    /// As [`Promotion::apply`], also reporting what was consumed.
    ///
    /// # Errors
    ///
    /// - [`PricingError::Overflow`]: the charge does not fit in a [`Price`].
    pub fn apply_with_application(
        &self,
        tally: &mut Tally,
    ) -> Result<Option<PromotionApplication>, PricingError> {
        match self {
            Promotion::Bundle(bundle) => bundle.apply(tally),
            Promotion::Pair(pair) => pair.apply(tally),
        }
    }
}

impl From<BundlePromotion> for Promotion {
    fn from(bundle: BundlePromotion) -> Self {
        Promotion::Bundle(bundle)
    }
}

impl From<PairPromotion> for Promotion {
    fn from(pair: PairPromotion) -> Self {
        Promotion::Pair(pair)
    }
}
