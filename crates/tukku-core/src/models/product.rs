//! Client-facing product rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog row after a client's pricing and stock rules have been
/// applied. Computed per request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub code: String,
    pub name: String,
    pub color: Option<String>,
    /// Client-visible price, rounded to 2 decimal places.
    pub price: Decimal,
    /// Suggested retail price, unmodified.
    pub retail_price: Decimal,
    /// Client-visible stock, whole units.
    pub stock: u32,
}
