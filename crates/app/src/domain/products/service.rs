//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError, models::Product, repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, sku: &str) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, sku).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: Product) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(&self, product: Product) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, sku: &str) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, sku).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn close(&self) {
        tracing::info!("closing database pool");

        self.db.close().await;
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by SKU.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product by SKU.
    async fn get_product(&self, sku: &str) -> Result<Product, ProductsServiceError>;

    /// Stores a new product. Fails with `AlreadyExists` when the SKU is taken.
    async fn create_product(&self, product: Product) -> Result<Product, ProductsServiceError>;

    /// Replaces the stored product sharing `product.sku`.
    async fn update_product(&self, product: Product) -> Result<Product, ProductsServiceError>;

    /// Deletes the product with the given SKU.
    async fn delete_product(&self, sku: &str) -> Result<(), ProductsServiceError>;

    /// Releases the underlying storage resources.
    async fn close(&self);
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::product};

    use super::*;

    #[tokio::test]
    async fn create_product_returns_stored_product() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(product("FAL-1000000")).await?;

        assert_eq!(created, product("FAL-1000000"));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(product("FAL-1000000")).await?;

        let fetched = ctx.products.get_product("FAL-1000000").await?;

        assert_eq!(fetched, product("FAL-1000000"));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_persists_alt_images_as_array() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(product("FAL-1000000")).await?;

        let stored: Vec<String> =
            sqlx::query_scalar("SELECT alt_images FROM product WHERE sku = $1")
                .bind("FAL-1000000")
                .fetch_one(ctx.db.pool())
                .await?;

        assert_eq!(stored, product("FAL-1000000").alt_images);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_sku_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product("FAL-9999999").await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_returns_created_products_in_sku_order() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(product("FAL-2000000")).await?;
        ctx.products.create_product(product("FAL-1000000")).await?;

        let products = ctx.products.list_products().await?;

        let skus: Vec<&str> = products.iter().map(|p| p.sku.as_str()).collect();

        assert_eq!(skus, vec!["FAL-1000000", "FAL-2000000"]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.products.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn update_product_overwrites_fields() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(product("FAL-1000000")).await?;

        let changed = Product {
            name: "new name".to_string(),
            alt_images: vec![],
            ..product("FAL-1000000")
        };

        let updated = ctx.products.update_product(changed.clone()).await?;

        assert_eq!(updated, changed);
        assert_eq!(ctx.products.get_product("FAL-1000000").await?, changed);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_sku_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.update_product(product("FAL-9999999")).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(product("FAL-1000000")).await?;

        ctx.products.delete_product("FAL-1000000").await?;

        let result = ctx.products.get_product("FAL-1000000").await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_sku_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.delete_product("FAL-9999999").await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_duplicate_sku_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(product("FAL-1000000")).await?;

        let result = ctx.products.create_product(product("FAL-1000000")).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_out_of_range_price_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(Product {
                price: 0.5,
                ..product("FAL-1000000")
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }
}
