//! Catalog pricing/stock transform.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::catalog::CatalogRow;
use crate::models::client::ClientProfile;
use crate::models::product::Product;

/// Apply a client's pricing and stock rules to a base catalog.
///
/// Pure: the same profile and rows always yield the same products, in the
/// same order. Prices round to 2 decimal places (midpoint away from zero)
/// and stock to the nearest whole unit; both clamp at zero.
pub fn compute_catalog(profile: &ClientProfile, rows: &[CatalogRow]) -> Vec<Product> {
    rows.iter().map(|row| compute_product(profile, row)).collect()
}

fn compute_product(profile: &ClientProfile, row: &CatalogRow) -> Product {
    let price = profile
        .price_overrides
        .get(&row.code)
        .copied()
        .unwrap_or(row.wholesale_price * profile.price_multiplier)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO);

    let stock = match profile.stock_overrides.get(&row.code) {
        Some(count) => *count,
        None => match profile.stock_cap {
            Some(cap) => row.available_stock.min(cap),
            None => scaled_stock(row.available_stock, profile.stock_factor),
        },
    };

    Product {
        id: row.code.clone(),
        code: row.code.clone(),
        name: row.name.clone(),
        color: row.color.clone(),
        price,
        retail_price: row.retail_price,
        stock,
    }
}

fn scaled_stock(available: u32, factor: Decimal) -> u32 {
    (Decimal::from(available) * factor)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(multiplier: &str, factor: &str) -> ClientProfile {
        ClientProfile {
            id: "acme".into(),
            name: "Acme Oy".into(),
            display_name: "Acme".into(),
            price_multiplier: multiplier.parse().unwrap(),
            stock_factor: factor.parse().unwrap(),
            description: String::new(),
            summary: None,
            price_overrides: Default::default(),
            stock_cap: None,
            stock_overrides: Default::default(),
        }
    }

    fn row(code: &str, wholesale: &str, stock: u32) -> CatalogRow {
        CatalogRow {
            code: code.into(),
            name: format!("Product {code}"),
            color: None,
            wholesale_price: wholesale.parse().unwrap(),
            retail_price: "99.90".parse().unwrap(),
            available_stock: stock,
        }
    }

    #[test]
    fn identity_profile_passes_rows_through() {
        let products = compute_catalog(&profile("1", "1"), &[row("P-1", "12.34", 7)]);
        assert_eq!(products[0].price, "12.34".parse().unwrap());
        assert_eq!(products[0].stock, 7);
        assert_eq!(products[0].id, "P-1");
        assert_eq!(products[0].retail_price, "99.90".parse().unwrap());
    }

    #[test]
    fn price_rounds_midpoint_up_at_two_decimals() {
        let products = compute_catalog(&profile("1", "1"), &[row("P-1", "19.995", 1)]);
        assert_eq!(products[0].price, "20.00".parse().unwrap());
    }

    #[test]
    fn price_applies_multiplier_before_rounding() {
        // 19.90 * 0.85 = 16.915 -> 16.92
        let products = compute_catalog(&profile("0.85", "1"), &[row("P-1", "19.90", 1)]);
        assert_eq!(products[0].price, "16.92".parse().unwrap());
    }

    #[test]
    fn stock_rounds_to_nearest_whole_unit() {
        let products = compute_catalog(&profile("1", "0.5"), &[row("P-1", "10", 7)]);
        assert_eq!(products[0].stock, 4);
    }

    #[test]
    fn negative_multiplier_clamps_price_to_zero() {
        let products = compute_catalog(&profile("-2", "1"), &[row("P-1", "10", 1)]);
        assert_eq!(products[0].price, Decimal::ZERO);
    }

    #[test]
    fn negative_factor_clamps_stock_to_zero() {
        let products = compute_catalog(&profile("1", "-0.5"), &[row("P-1", "10", 8)]);
        assert_eq!(products[0].stock, 0);
    }

    #[test]
    fn price_override_beats_multiplier() {
        let mut profile = profile("0.5", "1");
        profile
            .price_overrides
            .insert("P-1".into(), "7.77".parse().unwrap());
        let products = compute_catalog(&profile, &[row("P-1", "100", 1), row("P-2", "100", 1)]);
        assert_eq!(products[0].price, "7.77".parse().unwrap());
        assert_eq!(products[1].price, "50.00".parse().unwrap());
    }

    #[test]
    fn stock_cap_limits_available_stock() {
        let mut profile = profile("1", "1");
        profile.stock_cap = Some(10);
        let products = compute_catalog(&profile, &[row("P-1", "5", 25), row("P-2", "5", 3)]);
        assert_eq!(products[0].stock, 10);
        assert_eq!(products[1].stock, 3);
    }

    #[test]
    fn stock_override_beats_cap_and_factor() {
        let mut profile = profile("1", "0.5");
        profile.stock_cap = Some(10);
        profile.stock_overrides.insert("P-1".into(), 42);
        let products = compute_catalog(&profile, &[row("P-1", "5", 100)]);
        assert_eq!(products[0].stock, 42);
    }

    #[test]
    fn empty_catalog_yields_no_products() {
        assert!(compute_catalog(&profile("1", "1"), &[]).is_empty());
    }
}
