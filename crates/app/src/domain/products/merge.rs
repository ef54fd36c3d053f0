//! Patch merging

use crate::domain::products::models::Product;

impl Product {
    /// Merge a partial update into this product.
    ///
    /// Fields holding their zero value in `patch` keep the current value,
    /// every other field is replaced. The result is not validated.
    #[must_use]
    pub fn merge(self, patch: Product) -> Self {
        Self {
            sku: non_empty_or(patch.sku, self.sku),
            name: non_empty_or(patch.name, self.name),
            brand: non_empty_or(patch.brand, self.brand),
            size: if patch.size == 0 { self.size } else { patch.size },
            price: if patch.price == 0.0 {
                self.price
            } else {
                patch.price
            },
            image_url: non_empty_or(patch.image_url, self.image_url),
            alt_images: if patch.alt_images.is_empty() {
                self.alt_images
            } else {
                patch.alt_images
            },
        }
    }
}

fn non_empty_or(patch: String, current: String) -> String {
    if patch.is_empty() { current } else { patch }
}
