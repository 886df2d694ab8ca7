//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, Tally},
    checkout::Checkout,
    fixtures::{Fixture, FixtureError},
    prices::{Price, PriceError},
    pricing::{PriceTable, PricingError, total_price},
    promotions::{
        Promotion, PromotionError, PromotionKey, PromotionMeta,
        applications::PromotionApplication, budget::PromotionBudget, bundle::BundlePromotion,
        pair::PairPromotion,
    },
    receipt::{Receipt, ReceiptError},
    sku::Sku,
};
