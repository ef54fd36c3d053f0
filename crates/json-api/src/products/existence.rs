//! Target product lookup shared by the keyed routes.

use salvo::Request;

use product_api_app::domain::products::models::Product;

use crate::{errors::ApiError, state::State};

/// SKU from the `{sku}` path segment.
pub(crate) fn path_sku(req: &Request) -> Result<String, ApiError> {
    req.param::<String>("sku")
        .filter(|sku| !sku.trim().is_empty())
        .ok_or(ApiError::MissingSku)
}

/// Load the product addressed by the request path.
pub(crate) async fn existing_product(state: &State, req: &Request) -> Result<Product, ApiError> {
    let sku = path_sku(req)?;

    state
        .products
        .get_product(&sku)
        .await
        .map_err(ApiError::lookup("could not retrieve product"))
}
