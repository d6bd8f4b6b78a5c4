//! Hardcoded sample records substituted when the remote API is unreachable.
//!
//! Two establishments and their small product catalogs, enough to keep the
//! browse and cart flows working offline. An unknown establishment id
//! yields an empty product list.

use chrono::Utc;
use shared::{Establishment, Product};

/// Sample establishments used when the establishment list cannot be fetched.
pub fn establishments() -> Vec<Establishment> {
    let now = Utc::now().to_rfc3339();
    vec![
        Establishment {
            id: "diade".to_string(),
            name: "DiaDe".to_string(),
            category: "Restaurante".to_string(),
            description: Some("Lanches e Bebidas".to_string()),
            address: "Rua das Flores, 123".to_string(),
            logo_url: None,
            cover_url: None,
            rating: None,
            distance: None,
            created_at: now.clone(),
            updated_at: now.clone(),
        },
        Establishment {
            id: "ampm".to_string(),
            name: "AM/PM".to_string(),
            category: "Conveniência".to_string(),
            description: Some("Conveniência 24h".to_string()),
            address: "Av. Principal, 456".to_string(),
            logo_url: None,
            cover_url: None,
            rating: None,
            distance: None,
            created_at: now.clone(),
            updated_at: now,
        },
    ]
}

/// Sample products for one establishment, keyed by establishment id.
pub fn products(establishment_id: &str) -> Vec<Product> {
    let now = Utc::now().to_rfc3339();
    let make = |id: &str, name: &str, description: &str, price: &str, points_price: u32| Product {
        id: id.to_string(),
        establishment_id: establishment_id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price: price.to_string(),
        points_price,
        photo_url: None,
        is_active: true,
        created_at: now.clone(),
        updated_at: now.clone(),
    };

    match establishment_id {
        "diade" => vec![
            make("1", "Red Velvet Cookie", "Cookie de veludo vermelho", "7.95", 795),
            make("2", "Coffee Cup", "Café especial da casa", "8.90", 890),
        ],
        "ampm" => vec![make(
            "3",
            "Sanduíche Natural",
            "Sanduíche com ingredientes frescos",
            "12.50",
            1250,
        )],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_establishments() {
        let list = establishments();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "diade");
        assert_eq!(list[1].id, "ampm");
    }

    #[test]
    fn test_fallback_products_per_establishment() {
        assert_eq!(products("diade").len(), 2);
        assert_eq!(products("ampm").len(), 1);
        assert!(products("unknown").is_empty());
    }

    #[test]
    fn test_fallback_products_reference_their_establishment() {
        for product in products("diade") {
            assert_eq!(product.establishment_id, "diade");
            assert!(product.is_active);
        }
    }

    #[test]
    fn test_fallback_product_prices_are_parseable() {
        for product in products("diade").into_iter().chain(products("ampm")) {
            assert!(product.price.parse::<f64>().is_ok());
        }
    }
}
