//! Carts

pub mod errors;
pub mod models;
mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use repositories::{CartsRepository, MockCartsRepository, PgCartsRepository};
pub use service::*;
