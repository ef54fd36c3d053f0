//! In-memory products service.
//!
//! [`InMemoryProductsService`] keeps every product in a `BTreeMap` keyed by
//! SKU behind an async `RwLock`, so listings come back in SKU order like the
//! `PostgreSQL` implementation. Data is lost when the service is dropped.

use std::collections::{BTreeMap, btree_map::Entry};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::products::{
    errors::ProductsServiceError, models::Product, service::ProductsService,
};

#[derive(Debug, Default)]
pub struct InMemoryProductsService {
    products: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryProductsService {
    /// Create an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with `products`.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.sku.clone(), product))
            .collect();

        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn get_product(&self, sku: &str) -> Result<Product, ProductsServiceError> {
        self.products
            .read()
            .await
            .get(sku)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(&self, product: Product) -> Result<Product, ProductsServiceError> {
        match self.products.write().await.entry(product.sku.clone()) {
            Entry::Occupied(_) => Err(ProductsServiceError::AlreadyExists),
            Entry::Vacant(entry) => Ok(entry.insert(product).clone()),
        }
    }

    async fn update_product(&self, product: Product) -> Result<Product, ProductsServiceError> {
        let mut products = self.products.write().await;

        let stored = products
            .get_mut(&product.sku)
            .ok_or(ProductsServiceError::NotFound)?;

        *stored = product;

        Ok(stored.clone())
    }

    async fn delete_product(&self, sku: &str) -> Result<(), ProductsServiceError> {
        self.products
            .write()
            .await
            .remove(sku)
            .map(|_| ())
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn close(&self) {
        self.products.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::helpers::product;

    use super::*;

    #[tokio::test]
    async fn test_create_then_get() -> TestResult {
        let service = InMemoryProductsService::new();

        service.create_product(product("FAL-1000000")).await?;

        assert_eq!(
            service.get_product("FAL-1000000").await?,
            product("FAL-1000000")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_create_returns_already_exists() -> TestResult {
        let service = InMemoryProductsService::new();

        service.create_product(product("FAL-1000000")).await?;

        let result = service.create_product(product("FAL-1000000")).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_sku() -> TestResult {
        let service =
            InMemoryProductsService::with_products([product("FAL-3000000"), product("FAL-1000000")]);

        let skus: Vec<String> = service
            .list_products()
            .await?
            .into_iter()
            .map(|p| p.sku)
            .collect();

        assert_eq!(skus, vec!["FAL-1000000", "FAL-3000000"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_replaces_stored_product() -> TestResult {
        let service = InMemoryProductsService::with_products([product("FAL-1000000")]);

        let changed = Product {
            brand: "other".to_string(),
            ..product("FAL-1000000")
        };

        service.update_product(changed.clone()).await?;

        assert_eq!(service.get_product("FAL-1000000").await?, changed);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_sku_returns_not_found() {
        let service = InMemoryProductsService::new();

        assert!(matches!(
            service.get_product("FAL-1000000").await,
            Err(ProductsServiceError::NotFound)
        ));
        assert!(matches!(
            service.update_product(product("FAL-1000000")).await,
            Err(ProductsServiceError::NotFound)
        ));
        assert!(matches!(
            service.delete_product("FAL-1000000").await,
            Err(ProductsServiceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_product() -> TestResult {
        let service = InMemoryProductsService::with_products([product("FAL-1000000")]);

        service.delete_product("FAL-1000000").await?;

        assert!(service.list_products().await?.is_empty());

        Ok(())
    }
}
