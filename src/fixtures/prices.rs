//! Price Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{fixtures::FixtureError, prices::Price, pricing::PriceTable, sku::Sku};

/// Wrapper for unit prices in YAML
#[derive(Debug, Deserialize)]
pub struct PricesFixture {
    /// Map of SKU -> unit price in minor units
    pub prices: FxHashMap<Sku, i64>,
}

impl TryFrom<PricesFixture> for PriceTable {
    type Error = FixtureError;

    fn try_from(fixture: PricesFixture) -> Result<Self, Self::Error> {
        fixture
            .prices
            .into_iter()
            .map(|(sku, price)| {
                Price::try_from(price)
                    .map(|price| (sku, price))
                    .map_err(|err| FixtureError::InvalidPrice(sku, err))
            })
            .collect()
    }
}
