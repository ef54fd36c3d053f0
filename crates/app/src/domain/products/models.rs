//! Product Models

use validator::Validate;

use crate::domain::products::validation::{
    alt_image_urls, non_zero_price, non_zero_size, not_blank, required_text, sku_format,
    url_with_host,
};

/// Product Model
///
/// Every field is plain data; a zero value (empty string, `0`, `0.0`, empty
/// list) stands for "not supplied" both during validation and when merging a
/// patch.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct Product {
    /// Stock keeping unit, `FAL-` followed by a seven or eight digit number.
    #[validate(
        custom(function = "required_text"),
        custom(function = "sku_format")
    )]
    pub sku: String,

    /// Display name.
    #[validate(
        custom(function = "required_text"),
        custom(function = "not_blank"),
        length(min = 3, max = 50)
    )]
    pub name: String,

    /// Brand name.
    #[validate(
        custom(function = "required_text"),
        custom(function = "not_blank"),
        length(min = 3, max = 50)
    )]
    pub brand: String,

    /// Size.
    #[validate(custom(function = "non_zero_size"))]
    pub size: i64,

    /// Unit price.
    #[validate(
        custom(function = "non_zero_price"),
        range(min = 1.0, max = 99999999.0)
    )]
    pub price: f64,

    /// Main image URL.
    #[validate(
        custom(function = "required_text"),
        url,
        custom(function = "url_with_host")
    )]
    pub image_url: String,

    /// Alternative image URLs.
    #[validate(custom(function = "alt_image_urls"))]
    pub alt_images: Vec<String>,
}
