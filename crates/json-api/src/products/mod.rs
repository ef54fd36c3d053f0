//! Products

mod existence;
mod payload;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

pub(crate) use payload::ProductPayload;
