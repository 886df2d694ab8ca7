//! Basket

use std::{convert::Infallible, str::FromStr};

use crate::sku::Sku;

pub mod tally;

pub use tally::Tally;

/// Basket
///
/// The shopper's cart as supplied: an ordered list of SKUs. Pricing never
/// mutates a basket; promotions work on a [`Tally`] taken from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    items: Vec<Sku>,
}

impl Basket {
    /// Create a new, empty basket.
    #[must_use]
    pub fn new() -> Self {
        Basket { items: Vec::new() }
    }

    /// Create a new basket with the given items.
    pub fn with_items(items: impl IntoIterator<Item = Sku>) -> Self {
        Basket {
            items: items.into_iter().collect(),
        }
    }

    /// Add an item to the end of the basket.
    pub fn push(&mut self, sku: Sku) {
        self.items.push(sku);
    }

    /// Iterate over the items in the basket.
    pub fn iter(&self) -> impl Iterator<Item = Sku> + '_ {
        self.items.iter().copied()
    }

    /// Get the number of items in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count the items in the basket into a working multiset.
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.iter().collect()
    }
}

impl FromStr for Basket {
    type Err = Infallible;

    /// Every character is one item, so `"aab"` is two `a` and one `b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Basket::with_items(s.chars().map(Sku::from)))
    }
}

impl From<&str> for Basket {
    fn from(s: &str) -> Self {
        Basket::with_items(s.chars().map(Sku::from))
    }
}

impl Extend<Sku> for Basket {
    fn extend<I: IntoIterator<Item = Sku>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<Sku> for Basket {
    fn from_iter<I: IntoIterator<Item = Sku>>(iter: I) -> Self {
        Basket::with_items(iter)
    }
}
