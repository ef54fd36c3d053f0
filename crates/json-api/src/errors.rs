//! API Errors

use salvo::{
    Scribe,
    http::{ParseError, StatusCode},
    oapi::{self, Components, EndpointOutRegister, Operation},
    prelude::Response,
};
use thiserror::Error;
use tracing::error;

use product_api_app::domain::products::{ProductsServiceError, validation::ValidationErrors};

use crate::envelope::Envelope;

/// Outcomes that stop request processing early.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("could not decode the body")]
    Decode(#[source] ParseError),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("sku is not present")]
    MissingSku,

    #[error("SKU cannot be modified")]
    SkuChanged,

    #[error("product not found")]
    NotFound,

    #[error("No products found in database")]
    NoProducts,

    #[error("{context}")]
    Storage {
        context: &'static str,
        #[source]
        source: ProductsServiceError,
    },

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Map any storage failure to a 500 carrying `context`.
    pub(crate) fn storage(context: &'static str) -> impl FnOnce(ProductsServiceError) -> Self {
        move |source| Self::Storage { context, source }
    }

    /// Like [`ApiError::storage`], except a missing product becomes a 404.
    pub(crate) fn lookup(context: &'static str) -> impl FnOnce(ProductsServiceError) -> Self {
        move |source| match source {
            ProductsServiceError::NotFound => Self::NotFound,
            source => Self::Storage { context, source },
        }
    }

    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::Validation(_) | Self::MissingSku | Self::SkuChanged => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound | Self::NoProducts => StatusCode::NOT_FOUND,
            Self::Storage { .. } | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        match &self {
            Self::Storage { context, source } => error!("{context}: {source:?}"),
            Self::Decode(source) => tracing::debug!("could not decode the body: {source}"),
            _ => {}
        }

        Envelope::text(self.status_code(), self.to_string()).render(res);
    }
}

impl EndpointOutRegister for ApiError {
    fn register(_components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Invalid request"),
            (StatusCode::NOT_FOUND, "Product not found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Storage failure"),
        ] {
            operation
                .responses
                .insert(status.as_str(), oapi::Response::new(description));
        }
    }
}
