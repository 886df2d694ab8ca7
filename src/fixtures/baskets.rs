//! Basket Fixtures

use serde::Deserialize;

use crate::basket::Basket;

/// Wrapper for baskets in YAML
#[derive(Debug, Deserialize)]
pub struct BasketsFixture {
    /// Named baskets
    pub baskets: Vec<BasketFixture>,
}

/// A named basket, one character per item.
#[derive(Debug, Deserialize)]
pub struct BasketFixture {
    /// Basket name
    pub name: String,

    /// Items, e.g. `aaabbc`
    pub items: String,
}

impl From<BasketFixture> for (String, Basket) {
    fn from(fixture: BasketFixture) -> Self {
        let basket = Basket::from(fixture.items.as_str());

        (fixture.name, basket)
    }
}
