//! Products

pub mod errors;
mod memory;
mod merge;
pub mod models;
mod repository;
pub mod service;
pub mod validation;

pub use errors::ProductsServiceError;
pub use memory::InMemoryProductsService;
pub use service::*;
pub use validation::ProductValidator;
