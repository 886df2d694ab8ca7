//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the checkout example
#[derive(Debug, Parser)]
pub struct CheckoutArgs {
    /// Fixture set to use for prices, promotions & baskets
    #[clap(short, long, default_value = "kata")]
    pub fixture: String,

    /// Directory holding the fixture sets
    #[clap(long, default_value = "./fixtures")]
    pub base_path: PathBuf,

    /// Price this basket instead of the fixture's, one character per item
    #[clap(short, long, conflicts_with = "named")]
    pub basket: Option<String>,

    /// Price only the fixture basket with this name
    #[clap(short, long)]
    pub named: Option<String>,
}
