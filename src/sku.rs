//! SKUs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stock keeping unit: an opaque, single-character catalog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(char);

impl Sku {
    /// Creates a new SKU
    pub const fn new(code: char) -> Self {
        Sku(code)
    }

    /// Returns the character code for this SKU
    pub const fn code(self) -> char {
        self.0
    }
}

impl From<char> for Sku {
    fn from(code: char) -> Self {
        Sku(code)
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
