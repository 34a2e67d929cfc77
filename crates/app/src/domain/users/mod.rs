//! Users

pub mod email;
pub mod errors;
pub mod models;
mod repository;

pub use email::{Email, EmailError};
pub use errors::UsersError;
pub use repository::*;
