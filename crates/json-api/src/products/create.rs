//! Create Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*, products::payload::decode_product,
    state::State,
};

/// Create Product Handler
///
/// Validates the body and stores it as a new product.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    request_body = crate::products::ProductPayload
)]
#[tracing::instrument(name = "products.create", skip_all, fields(sku = tracing::field::Empty))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<String>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = decode_product(req).await?;

    tracing::Span::current().record("sku", tracing::field::display(&product.sku));

    state.validator.validate(&product)?;

    let created = state
        .products
        .create_product(product)
        .await
        .map_err(ApiError::storage("could not create new product"))?;

    tracing::info!(sku = %created.sku, "created product");

    Ok(Envelope::text(StatusCode::OK, "product successfully created"))
}
