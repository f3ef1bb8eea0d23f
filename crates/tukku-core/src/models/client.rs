//! Client profile domain model.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A wholesale client's pricing and stock configuration.
///
/// The source of truth is a static per-client configuration record, loaded
/// fresh on every request; the profile is immutable at request time.
/// Absent multiplier/factor fields mean 1 (identity transform).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    /// Unique client identifier. Filled from the record's file name when
    /// the record itself omits it.
    #[serde(default)]
    pub id: String,
    /// Name as written in the configuration record.
    #[serde(default)]
    pub name: String,
    /// Presentation name, resolved once at configuration-load time.
    #[serde(default)]
    pub display_name: String,
    /// Scalar applied to the wholesale price.
    #[serde(default = "one")]
    pub price_multiplier: Decimal,
    /// Scalar applied to the available stock.
    #[serde(default = "one")]
    pub stock_factor: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Per-product-code price overrides; an entry wins over the multiplier.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub price_overrides: BTreeMap<String, Decimal>,
    /// Upper bound on the stock shown for any product. Applied instead of
    /// the stock factor when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_cap: Option<u32>,
    /// Per-product-code stock overrides; an entry wins over cap and factor.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stock_overrides: BTreeMap<String, u32>,
}

fn one() -> Decimal {
    Decimal::ONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_factors_default_to_identity() {
        let profile: ClientProfile =
            serde_json::from_str(r#"{"name": "Acme Oy"}"#).expect("minimal record");
        assert_eq!(profile.price_multiplier, Decimal::ONE);
        assert_eq!(profile.stock_factor, Decimal::ONE);
        assert!(profile.price_overrides.is_empty());
        assert!(profile.stock_cap.is_none());
    }

    #[test]
    fn record_fields_use_camel_case() {
        let profile: ClientProfile = serde_json::from_str(
            r#"{
                "id": "acme",
                "name": "Acme Oy",
                "displayName": "Acme",
                "priceMultiplier": 0.85,
                "stockFactor": 0.5,
                "description": "Premium partner.",
                "summary": "Premium wholesale partner.",
                "stockCap": 100
            }"#,
        )
        .expect("full record");
        assert_eq!(profile.display_name, "Acme");
        assert_eq!(profile.price_multiplier, "0.85".parse().unwrap());
        assert_eq!(profile.stock_cap, Some(100));
        assert_eq!(profile.summary.as_deref(), Some("Premium wholesale partner."));
    }
}
