//! Products

pub mod errors;
pub mod models;
mod repository;

pub use errors::ProductsError;
pub use repository::*;
