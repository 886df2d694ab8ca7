//! Fixtures
//!
//! Named sets of YAML configuration: a price table, an ordered promotion
//! list and some baskets, stored as `prices/<set>.yml`,
//! `promotions/<set>.yml` and `baskets/<set>.yml` under a base path.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use thiserror::Error;

use crate::{
    basket::Basket,
    checkout::Checkout,
    fixtures::{
        baskets::BasketsFixture,
        prices::PricesFixture,
        promotions::{PromotionFixture, PromotionsFixture},
    },
    prices::PriceError,
    pricing::PriceTable,
    promotions::{Promotion, PromotionError, PromotionKey, PromotionMeta},
    sku::Sku,
};

pub mod baskets;
pub mod prices;
pub mod promotions;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid unit price
    #[error("Invalid price for {0}: {1}")]
    InvalidPrice(Sku, #[source] PriceError),

    /// Invalid promotion configuration
    #[error("Invalid promotion {0}: {1}")]
    InvalidPromotion(String, #[source] PromotionError),

    /// Two promotions share a key
    #[error("Duplicate promotion key: {0}")]
    DuplicatePromotion(String),

    /// Promotion not found
    #[error("Promotion not found: {0}")]
    PromotionNotFound(String),

    /// Basket not found
    #[error("Basket not found: {0}")]
    BasketNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Unit prices
    prices: PriceTable,

    /// `SlotMap` of promotion names with generated keys
    promotion_meta: SlotMap<PromotionKey, PromotionMeta>,

    /// String key -> `SlotMap` key mappings for lookups
    promotion_keys: FxHashMap<String, PromotionKey>,

    /// Pre-built promotions, in application order
    promotions: Vec<Promotion>,

    /// Named baskets, in file order
    baskets: Vec<(String, Basket)>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            prices: PriceTable::new(),
            promotion_meta: SlotMap::with_key(),
            promotion_keys: FxHashMap::default(),
            promotions: Vec::new(),
            baskets: Vec::new(),
        }
    }

    fn read(&self, category: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        Ok(fs::read_to_string(file_path)?)
    }

    /// Load unit prices from a YAML fixture file, adding to any already loaded
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a price is negative.
    pub fn load_prices(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: PricesFixture = serde_norway::from_str(&self.read("prices", name)?)?;

        for (sku, price) in PriceTable::try_from(fixture)?.iter() {
            self.prices.insert(sku, price);
        }

        Ok(self)
    }

    /// Load promotions from a YAML fixture file, after any already loaded
    ///
    /// The file is loaded whole or not at all: if any entry fails, none of
    /// its promotions are added.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a promotion is
    /// invalid, or a promotion key is reused.
    pub fn load_promotions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: PromotionsFixture = serde_norway::from_str(&self.read("promotions", name)?)?;

        let mut staged: Vec<(String, Promotion)> = Vec::with_capacity(fixture.promotions.len());

        for promotion_fixture in fixture.promotions {
            match self.stage_promotion(promotion_fixture, &staged) {
                Ok(entry) => staged.push(entry),
                Err(err) => {
                    for (_, promotion) in &staged {
                        self.promotion_meta.remove(promotion.key());
                    }

                    return Err(err);
                }
            }
        }

        for (key, promotion) in staged {
            self.promotion_keys.insert(key, promotion.key());
            self.promotions.push(promotion);
        }

        Ok(self)
    }

    /// Allocate a key for one promotion entry and build it, leaving no
    /// metadata behind if it is invalid.
    fn stage_promotion(
        &mut self,
        promotion_fixture: PromotionFixture,
        staged: &[(String, Promotion)],
    ) -> Result<(String, Promotion), FixtureError> {
        let key = promotion_fixture.key().to_string();

        if self.promotion_keys.contains_key(&key) || staged.iter().any(|(k, _)| *k == key) {
            return Err(FixtureError::DuplicatePromotion(key));
        }

        let promotion_key = self.promotion_meta.insert(PromotionMeta::default());

        let (meta, promotion) = match promotion_fixture.try_into_promotion(promotion_key) {
            Ok(built) => built,
            Err(err) => {
                self.promotion_meta.remove(promotion_key);
                return Err(err);
            }
        };

        if let Some(meta_slot) = self.promotion_meta.get_mut(promotion_key) {
            *meta_slot = meta;
        }

        Ok((key, promotion))
    }

    /// Load named baskets from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_baskets(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: BasketsFixture = serde_norway::from_str(&self.read("baskets", name)?)?;

        self.baskets
            .extend(fixture.baskets.into_iter().map(Into::into));

        Ok(self)
    }

    /// Load a complete fixture set (prices, promotions and baskets with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn load_set(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        self.load_prices(name)?
            .load_promotions(name)?
            .load_baskets(name)
    }

    /// Load a complete fixture set from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_set(name)?;

        Ok(fixture)
    }

    /// Get the unit prices
    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Get all promotions, in application order
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// Get a promotion by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the promotion is not found.
    pub fn promotion(&self, key: &str) -> Result<&Promotion, FixtureError> {
        let promotion_key = self
            .promotion_keys
            .get(key)
            .ok_or_else(|| FixtureError::PromotionNotFound(key.to_string()))?;

        self.promotions
            .iter()
            .find(|p| p.key() == *promotion_key)
            .ok_or_else(|| FixtureError::PromotionNotFound(key.to_string()))
    }

    /// Get the promotion metadata `SlotMap`
    pub fn promotion_meta_map(&self) -> &SlotMap<PromotionKey, PromotionMeta> {
        &self.promotion_meta
    }

    /// Get a basket by name
    ///
    /// # Errors
    ///
    /// Returns an error if no basket has that name.
    pub fn basket(&self, name: &str) -> Result<&Basket, FixtureError> {
        self.baskets
            .iter()
            .find_map(|(basket_name, basket)| (basket_name == name).then_some(basket))
            .ok_or_else(|| FixtureError::BasketNotFound(name.to_string()))
    }

    /// Iterate over the named baskets
    pub fn baskets(&self) -> impl Iterator<Item = (&str, &Basket)> {
        self.baskets
            .iter()
            .map(|(name, basket)| (name.as_str(), basket))
    }

    /// Checkout using this fixture's prices
    pub fn checkout(&self) -> Checkout<'_> {
        Checkout::new(&self.prices)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
