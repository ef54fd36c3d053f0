//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*, products::existence::existing_product,
    state::State,
};

/// Delete Product Handler
#[endpoint(tags("products"), summary = "Delete Product")]
#[tracing::instrument(name = "products.delete", skip_all, fields(sku = tracing::field::Empty))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<String>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = existing_product(state, req).await?;

    tracing::Span::current().record("sku", tracing::field::display(&product.sku));

    state
        .products
        .delete_product(&product.sku)
        .await
        .map_err(ApiError::lookup("could not delete product"))?;

    tracing::info!(sku = %product.sku, "deleted product");

    Ok(Envelope::text(StatusCode::OK, "product successfully deleted"))
}
