//! Test Helpers

use crate::domain::products::models::Product;

/// A product passing every validation rule.
pub(crate) fn product(sku: &str) -> Product {
    Product {
        sku: sku.to_string(),
        name: "Test Product".to_string(),
        brand: "Test Brand".to_string(),
        size: 10,
        price: 100.0,
        image_url: "https://images.example.com/main.png".to_string(),
        alt_images: vec![
            "https://images.example.com/alt-1.png".to_string(),
            "https://images.example.com/alt-2.png".to_string(),
        ],
    }
}
