//! Cartkeep Domain Concerns

pub mod carts;
pub mod products;
pub mod users;
