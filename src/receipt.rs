//! Receipt

use std::io;

use slotmap::SlotMap;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    basket::Tally,
    prices::Price,
    pricing::{PriceTable, PricingError},
    promotions::{PromotionKey, PromotionMeta, applications::PromotionApplication},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// An item on the receipt has no unit price.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Final receipt for a processed basket.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Promotions that matched, in the order they were applied
    applications: Vec<PromotionApplication>,

    /// Items left over after every promotion, charged at unit price
    full_price_items: Tally,

    /// Total cost before any promotion applications
    subtotal: Price,

    /// Total amount paid for all items after any promotion applications
    total: Price,
}

impl Receipt {
    /// Create a new receipt with the given details.
    #[must_use]
    pub fn new(
        applications: Vec<PromotionApplication>,
        full_price_items: Tally,
        subtotal: Price,
        total: Price,
    ) -> Self {
        Self {
            applications,
            full_price_items,
            subtotal,
            total,
        }
    }

    /// Promotions that matched, in application order.
    pub fn applications(&self) -> &[PromotionApplication] {
        &self.applications
    }

    /// Items purchased at full price (not in any promotion).
    pub fn full_price_items(&self) -> &Tally {
        &self.full_price_items
    }

    /// Total cost before any promotion applications
    pub fn subtotal(&self) -> Price {
        self.subtotal
    }

    /// Total amount paid for all items
    pub fn total(&self) -> Price {
        self.total
    }

    /// Savings made by applying promotions, zero if they cost more overall.
    pub fn savings(&self) -> Price {
        self.subtotal.saturating_sub(self.total)
    }

    /// Writes the receipt as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns an error if an item has no unit price or writing fails.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        prices: &PriceTable,
        promotion_meta: &SlotMap<PromotionKey, PromotionMeta>,
    ) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Items", "Promotion", "Base Price", "Price", "Savings"]);

        for app in &self.applications {
            let name = promotion_meta
                .get(app.promotion_key)
                .map_or("<unknown>", |meta| meta.name.as_str());

            let items = app
                .consumed
                .iter()
                .map(|(sku, count)| format!("{count} × {sku}"))
                .collect::<Vec<_>>()
                .join("\n");

            builder.push_record([
                items,
                format!("{name} (×{})", app.matches),
                app.original_price(prices)?.to_string(),
                app.price.to_string(),
                format!("-{}", app.savings(prices)?),
            ]);
        }

        for (sku, count) in self.full_price_items.iter() {
            let price = prices.line_price(sku, count)?;

            builder.push_record([
                format!("{count} × {sku}"),
                String::new(),
                price.to_string(),
                price.to_string(),
                String::new(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, " Subtotal: {:>8}", self.subtotal)?;
        writeln!(out, "    Total: {:>8}", self.total)?;
        writeln!(out, "  Savings: {:>8}", self.savings())?;

        Ok(())
    }
}
