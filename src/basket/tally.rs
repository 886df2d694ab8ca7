//! Tally
//!
//! The working multiset promotions consume from: a count per SKU.

use rustc_hash::FxHashMap;

use crate::sku::Sku;

/// Item counts by SKU.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: FxHashMap<Sku, u32>,
}

impl Tally {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `sku` items remaining.
    pub fn count(&self, sku: Sku) -> u32 {
        self.counts.get(&sku).copied().unwrap_or(0)
    }

    /// Add `n` items of `sku`.
    pub fn add(&mut self, sku: Sku, n: u32) {
        if n > 0 {
            *self.counts.entry(sku).or_insert(0) += n;
        }
    }

    /// Remove up to `n` items of `sku`, returning how many were removed.
    pub fn remove(&mut self, sku: Sku, n: u32) -> u32 {
        let Some(count) = self.counts.get_mut(&sku) else {
            return 0;
        };

        let removed = (*count).min(n);
        *count -= removed;

        if *count == 0 {
            self.counts.remove(&sku);
        }

        removed
    }

    /// Total number of items remaining.
    pub fn len(&self) -> usize {
        self.counts.values().map(|&count| count as usize).sum()
    }

    /// Whether no items remain.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Remaining `(sku, count)` pairs, ordered by SKU.
    pub fn iter(&self) -> impl Iterator<Item = (Sku, u32)> + use<> {
        let mut entries: Vec<(Sku, u32)> = self
            .counts
            .iter()
            .map(|(&sku, &count)| (sku, count))
            .collect();

        entries.sort_unstable();
        entries.into_iter()
    }
}

impl FromIterator<Sku> for Tally {
    fn from_iter<I: IntoIterator<Item = Sku>>(iter: I) -> Self {
        let mut tally = Tally::new();

        for sku in iter {
            tally.add(sku, 1);
        }

        tally
    }
}
