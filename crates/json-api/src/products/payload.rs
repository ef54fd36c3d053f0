//! Product wire representation

use salvo::{Request, http::ParseError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use product_api_app::domain::products::models::Product;

use crate::errors::ApiError;

/// Product as sent and received over HTTP.
///
/// Absent fields decode to their zero value and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct ProductPayload {
    /// Stock keeping unit, e.g. `FAL-1000000`
    pub sku: String,

    pub name: String,

    pub brand: String,

    pub size: i64,

    pub price: f64,

    /// Main image URL
    #[serde(rename = "imageURL")]
    pub image_url: String,

    /// Alternative image URLs
    #[serde(rename = "altImages")]
    pub alt_images: Vec<String>,
}

impl From<ProductPayload> for Product {
    fn from(payload: ProductPayload) -> Self {
        Product {
            sku: payload.sku,
            name: payload.name,
            brand: payload.brand,
            size: payload.size,
            price: payload.price,
            image_url: payload.image_url,
            alt_images: payload.alt_images,
        }
    }
}

impl From<Product> for ProductPayload {
    fn from(product: Product) -> Self {
        ProductPayload {
            sku: product.sku,
            name: product.name,
            brand: product.brand,
            size: product.size,
            price: product.price,
            image_url: product.image_url,
            alt_images: product.alt_images,
        }
    }
}

/// Decode the request body into a candidate product.
///
/// The body is read as JSON whatever `Content-Type` the client sent.
pub(crate) async fn decode_product(req: &mut Request) -> Result<Product, ApiError> {
    let payload = req.payload().await.map_err(ApiError::Decode)?;

    serde_json::from_slice::<ProductPayload>(payload)
        .map(Product::from)
        .map_err(|error| ApiError::Decode(ParseError::from(error)))
}
