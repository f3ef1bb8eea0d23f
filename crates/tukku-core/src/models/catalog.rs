//! Raw catalog rows as stored in per-client catalog files.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer, Serialize};

/// One raw catalog row, keeping the column names of the spreadsheet export
/// the catalog files are generated from.
///
/// Numeric columns arrive as JSON numbers or strings depending on how the
/// source sheet was converted; both forms are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    #[serde(rename = "Product code")]
    pub code: String,
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Color", default)]
    pub color: Option<String>,
    #[serde(rename = "Wholesale price", deserialize_with = "lenient_decimal")]
    pub wholesale_price: Decimal,
    #[serde(rename = "Retail price", deserialize_with = "lenient_decimal")]
    pub retail_price: Decimal,
    #[serde(rename = "Available stock", deserialize_with = "lenient_stock")]
    pub available_stock: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => Decimal::from_f64(n)
            .ok_or_else(|| D::Error::custom(format!("unrepresentable decimal: {n}"))),
        RawNumber::Text(s) => s
            .trim()
            .parse::<Decimal>()
            .map_err(|e| D::Error::custom(format!("invalid decimal '{s}': {e}"))),
    }
}

fn lenient_stock<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => {
            if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
                Ok(n as u32)
            } else {
                Err(D::Error::custom(format!("invalid stock count: {n}")))
            }
        }
        RawNumber::Text(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|e| D::Error::custom(format!("invalid stock count '{s}': {e}"))),
    }
}
