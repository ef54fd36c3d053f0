//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    products::{ProductPayload, existence::existing_product},
    state::State,
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<ProductPayload>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = existing_product(state, req).await?;

    Ok(Envelope::ok(product.into()))
}
