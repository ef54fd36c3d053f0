//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*, products::ProductPayload, state::State,
};

/// List Products Handler
///
/// Returns every stored product ordered by SKU.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Envelope<Vec<ProductPayload>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .products
        .list_products()
        .await
        .map_err(ApiError::storage("could not get the list of products"))?;

    if products.is_empty() {
        return Err(ApiError::NoProducts);
    }

    Ok(Envelope::ok(
        products.into_iter().map(ProductPayload::from).collect(),
    ))
}
