//! Promotion Fixtures

use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    promotions::{Promotion, PromotionKey, PromotionMeta, budget::PromotionBudget},
    sku::Sku,
};

/// Wrapper for promotions in YAML
#[derive(Debug, Deserialize)]
pub struct PromotionsFixture {
    /// Promotions, in the order they apply
    pub promotions: Vec<PromotionFixture>,
}

/// Promotion fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionFixture {
    /// N items of one SKU for a fixed price
    Bundle {
        /// Lookup key
        key: String,

        /// Promotion name
        name: String,

        /// Items per bundle
        quantity: i64,

        /// Bundled SKU
        sku: Sku,

        /// Price per bundle
        price: i64,

        /// Maximum bundles per checkout
        #[serde(default)]
        limit: Option<u32>,
    },

    /// One each of two SKUs for a fixed price
    Pair {
        /// Lookup key
        key: String,

        /// Promotion name
        name: String,

        /// The two paired SKUs
        skus: [Sku; 2],

        /// Price per pair
        price: i64,

        /// Maximum pairs per checkout
        #[serde(default)]
        limit: Option<u32>,
    },
}

impl PromotionFixture {
    /// Lookup key for this promotion.
    pub fn key(&self) -> &str {
        match self {
            PromotionFixture::Bundle { key, .. } | PromotionFixture::Pair { key, .. } => key,
        }
    }

    /// Convert to `PromotionMeta` and `Promotion`
    ///
    /// # Errors
    ///
    /// Returns an error if the promotion configuration is invalid.
    pub fn try_into_promotion(
        self,
        key: PromotionKey,
    ) -> Result<(PromotionMeta, Promotion), FixtureError> {
        match self {
            PromotionFixture::Bundle {
                key: fixture_key,
                name,
                quantity,
                sku,
                price,
                limit,
            } => {
                let promotion = Promotion::bundle(key, quantity, sku, price)
                    .map_err(|err| FixtureError::InvalidPromotion(fixture_key, err))?;

                Ok((PromotionMeta { name }, with_limit(promotion, limit)))
            }
            PromotionFixture::Pair {
                key: fixture_key,
                name,
                skus: [first, second],
                price,
                limit,
            } => {
                let promotion = Promotion::pair(key, first, second, price)
                    .map_err(|err| FixtureError::InvalidPromotion(fixture_key, err))?;

                Ok((PromotionMeta { name }, with_limit(promotion, limit)))
            }
        }
    }
}

fn with_limit(promotion: Promotion, limit: Option<u32>) -> Promotion {
    match limit {
        Some(limit) => promotion.with_budget(PromotionBudget::with_application_limit(limit)),
        None => promotion,
    }
}
