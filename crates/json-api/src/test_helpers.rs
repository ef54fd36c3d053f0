//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use product_api_app::domain::products::{
    InMemoryProductsService, MockProductsService, ProductValidator, ProductsService,
    models::Product,
};

use crate::{router::app_router, state::State};

pub(crate) fn make_product(sku: &str) -> Product {
    Product {
        sku: sku.to_string(),
        name: "Test Product".to_string(),
        brand: "Test Brand".to_string(),
        size: 10,
        price: 100.0,
        image_url: "https://images.example.com/main.png".to_string(),
        alt_images: vec!["https://images.example.com/alt.png".to_string()],
    }
}

/// A mock rejecting every call not explicitly expected by the test.
pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_close().never();

    products
}

pub(crate) fn products_service(products: impl ProductsService + 'static) -> Service {
    let state = Arc::new(State::new(
        Arc::new(products),
        Arc::new(ProductValidator::default()),
    ));

    Service::new(Router::new().hoop(inject(state)).push(app_router())).hoop(remove_slash())
}

pub(crate) fn in_memory_service(products: impl IntoIterator<Item = Product>) -> Service {
    products_service(InMemoryProductsService::with_products(products))
}

pub(crate) fn product_json(sku: &str) -> serde_json::Value {
    serde_json::to_value(crate::products::ProductPayload::from(make_product(sku)))
        .unwrap_or_default()
}
