//! State

use std::sync::Arc;

use product_api_app::{
    context::AppContext,
    domain::products::{ProductValidator, ProductsService},
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
    pub(crate) validator: Arc<ProductValidator>,
}

impl State {
    #[must_use]
    pub(crate) fn new(products: Arc<dyn ProductsService>, validator: Arc<ProductValidator>) -> Self {
        Self {
            products,
            validator,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: &AppContext, validator: Arc<ProductValidator>) -> Arc<Self> {
        Arc::new(Self::new(Arc::clone(&app.products), validator))
    }
}
