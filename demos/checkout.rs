//! Checkout Example
//!
//! Prices baskets from a fixture set and prints a receipt for each.
//!
//! Use `-f` to load a fixture set by name
//! Use `-b` to price a literal basket, e.g. `-b aaabbbbbcd`
//! Use `-n` to price a single named basket from the fixture set
//! Set `RUST_LOG=till=debug` to see each promotion as it applies

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use till::{basket::Basket, fixtures::Fixture, utils::CheckoutArgs};
use tracing_subscriber::EnvFilter;

/// Checkout Example
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = CheckoutArgs::parse();

    let mut fixture = Fixture::with_base_path(&args.base_path);
    fixture.load_set(&args.fixture)?;

    let baskets: Vec<(String, Basket)> = match (&args.basket, &args.named) {
        (Some(items), _) => vec![(items.clone(), Basket::from(items.as_str()))],
        (None, Some(name)) => vec![(name.clone(), fixture.basket(name)?.clone())],
        (None, None) => fixture
            .baskets()
            .map(|(name, basket)| (name.to_string(), basket.clone()))
            .collect(),
    };

    let checkout = fixture.checkout();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for (name, basket) in &baskets {
        writeln!(handle, "\n{name}")?;

        checkout.receipt(basket, fixture.promotions())?.write_to(
            &mut handle,
            fixture.prices(),
            fixture.promotion_meta_map(),
        )?;
    }

    Ok(())
}
