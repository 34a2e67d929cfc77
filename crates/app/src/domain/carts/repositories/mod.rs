//! Cart Repositories

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    carts::models::{Cart, CartUuid, CheckoutOutcome},
    users::Email,
};

mod carts;
mod items;

pub use carts::PgCartsRepository;

#[automock]
#[async_trait]
/// Cart persistence operations.
pub trait CartsRepository: Send + Sync {
    /// Load the cart owned by `email`, with its items in stored order.
    async fn find_cart(&self, email: &Email) -> Result<Option<Cart>, sqlx::Error>;

    /// Create an empty cart for `email`, or return the one that already exists.
    async fn create_cart(&self, email: &Email) -> Result<Cart, sqlx::Error>;

    /// Persist the cart's items as they are in memory and return the stored cart.
    async fn save_cart(&self, cart: &Cart) -> Result<Cart, sqlx::Error>;

    /// Debit `total` from the owner's wallet and clear the cart, atomically.
    ///
    /// The cart is locked and its total recomputed first. Anything other than
    /// [`CheckoutOutcome::Paid`] leaves the store untouched.
    async fn checkout(
        &self,
        cart: CartUuid,
        email: &Email,
        total: u64,
    ) -> Result<CheckoutOutcome, sqlx::Error>;
}
