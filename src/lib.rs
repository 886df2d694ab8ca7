//! Till
//!
//! Till prices a basket of SKUs under an ordered list of promotions. Each
//! promotion consumes the items it matches and charges a fixed price for
//! them; whatever is left is charged at unit price.

pub mod basket;
pub mod checkout;
pub mod fixtures;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod promotions;
pub mod receipt;
pub mod sku;
pub mod utils;
