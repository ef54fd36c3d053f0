//! Product API Domain Concerns

pub mod products;
