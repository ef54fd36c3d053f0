//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    products::{existence::existing_product, payload::decode_product},
    state::State,
};

/// Update Product Handler
///
/// Merges the supplied fields into the stored product, re-validates the
/// result and stores it. Fields left out of the body, or sent as their zero
/// value, keep their stored value.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    request_body = crate::products::ProductPayload
)]
#[tracing::instrument(name = "products.update", skip_all, fields(sku = tracing::field::Empty))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<String>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let current = existing_product(state, req).await?;

    tracing::Span::current().record("sku", tracing::field::display(&current.sku));

    let patch = decode_product(req).await?;

    if !patch.sku.is_empty() && patch.sku != current.sku {
        return Err(ApiError::SkuChanged);
    }

    let merged = current.merge(patch);

    state.validator.validate(&merged)?;

    let updated = state
        .products
        .update_product(merged)
        .await
        .map_err(ApiError::lookup("could not update product"))?;

    tracing::info!(sku = %updated.sku, "updated product");

    Ok(Envelope::text(StatusCode::OK, "product successfully updated"))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use product_api_app::domain::products::{
        MockProductsService, ProductsService, ProductsServiceError, models::Product,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn repo_with_stored(sku: &'static str) -> MockProductsService {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .with(eq(sku))
            .returning(|sku| Ok(make_product(sku)));

        repo.expect_list_products().never();
        repo.expect_create_product().never();
        repo.expect_delete_product().never();

        repo
    }

    #[tokio::test]
    async fn test_update_product_merges_patch() -> TestResult {
        let mut repo = repo_with_stored("FAL-1000000");

        repo.expect_update_product()
            .once()
            .withf(|product| {
                *product
                    == Product {
                        name: "new".to_string(),
                        ..make_product("FAL-1000000")
                    }
            })
            .returning(Ok);

        let mut res = TestClient::patch("http://example.com/product/FAL-1000000")
            .json(&json!({ "name": "new" }))
            .send(&products_service(repo))
            .await;

        let body: Envelope<String> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "product successfully updated");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_missing_returns_404_before_decoding() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .returning(|_| Err(ProductsServiceError::NotFound));

        repo.expect_update_product().never();

        let mut res = TestClient::patch("http://example.com/product/FAL-9999999")
            .raw_json("not json")
            .send(&products_service(repo))
            .await;

        let body: Envelope<String> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_undecodable_body_returns_400() -> TestResult {
        let mut repo = repo_with_stored("FAL-1000000");

        repo.expect_update_product().never();

        let mut res = TestClient::patch("http://example.com/product/FAL-1000000")
            .raw_json("{")
            .send(&products_service(repo))
            .await;

        let body: Envelope<String> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "could not decode the body");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_rejects_sku_change() -> TestResult {
        let mut repo = repo_with_stored("FAL-1000000");

        repo.expect_update_product().never();

        let mut res = TestClient::patch("http://example.com/product/FAL-1000000")
            .json(&json!({ "sku": "FAL-2000000" }))
            .send(&products_service(repo))
            .await;

        let body: Envelope<String> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "SKU cannot be modified");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_validates_merged_product() -> TestResult {
        let mut repo = repo_with_stored("FAL-1000000");

        repo.expect_update_product().never();

        let mut res = TestClient::patch("http://example.com/product/FAL-1000000")
            .json(&json!({ "price": 100_000_000.0, "imageURL": "http/invalid-url" }))
            .send(&products_service(repo))
            .await;

        let body: Envelope<String> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.message,
            "Price must be 99,999,999.00 or less | ImageURL is not a valid url value"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_storage_failure_returns_500() -> TestResult {
        let mut repo = repo_with_stored("FAL-1000000");

        repo.expect_update_product()
            .once()
            .returning(|_| Err(ProductsServiceError::InvalidData));

        let mut res = TestClient::patch("http://example.com/product/FAL-1000000")
            .json(&json!({ "size": 12 }))
            .send(&products_service(repo))
            .await;

        let body: Envelope<String> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "could not update product");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_in_memory_keeps_untouched_fields() -> TestResult {
        let store = Arc::new(
            product_api_app::domain::products::InMemoryProductsService::with_products([
                make_product("FAL-1000000"),
            ]),
        );

        let state = Arc::new(State::new(store.clone(), Arc::default()));

        let service = Service::new(
            Router::new()
                .hoop(salvo::affix_state::inject(state))
                .push(crate::router::app_router()),
        );

        let res = TestClient::patch("http://example.com/product/FAL-1000000")
            .json(&json!({ "brand": "Other Brand", "altImages": ["https://b.example.com/1.png"] }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let stored = store.get_product("FAL-1000000").await?;

        assert_eq!(
            stored,
            Product {
                brand: "Other Brand".to_string(),
                alt_images: vec!["https://b.example.com/1.png".to_string()],
                ..make_product("FAL-1000000")
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_lookup_failure_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .with(eq("FAL-1000000"))
            .returning(|_| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        repo.expect_update_product().never();
        repo.expect_list_products().never();
        repo.expect_create_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::patch("http://example.com/product/FAL-1000000")
            .json(&json!({ "size": 12 }))
            .send(&products_service(repo))
            .await;

        let body: Envelope<String> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.status, 500);
        assert_eq!(body.message, "could not retrieve product");

        Ok(())
    }
}
