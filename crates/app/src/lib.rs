//! Cart management: repositories, the carts service and its error mapping.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod errors;
pub mod logging;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
