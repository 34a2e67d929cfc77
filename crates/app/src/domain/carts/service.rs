//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CheckoutOutcome, CheckoutReceipt, validate_quantity},
            repositories::{CartsRepository, PgCartsRepository},
        },
        products::{
            PgProductsRepository, ProductsRepository,
            models::{Product, ProductUuid},
        },
        users::models::User,
    },
};

/// Cart rules applied over the carts and products repositories.
#[derive(Clone)]
pub struct DefaultCartsService {
    carts: Arc<dyn CartsRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl DefaultCartsService {
    #[must_use]
    pub fn new(carts: Arc<dyn CartsRepository>, products: Arc<dyn ProductsRepository>) -> Self {
        Self { carts, products }
    }

    /// Service backed by the `PostgreSQL` repositories.
    #[must_use]
    pub fn postgres(db: Db) -> Self {
        Self::new(
            Arc::new(PgCartsRepository::new(db.clone())),
            Arc::new(PgProductsRepository::new(db)),
        )
    }

    async fn catalog_product(&self, product: ProductUuid) -> Result<Product, CartsServiceError> {
        self.products
            .find_product(product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)
    }

    async fn existing_cart(&self, user: &User) -> Result<Cart, CartsServiceError> {
        self.carts
            .find_cart(&user.email)
            .await?
            .ok_or(CartsServiceError::NoCart)
    }
}

#[async_trait]
impl CartsService for DefaultCartsService {
    #[tracing::instrument(
        name = "carts.get",
        skip(self, user),
        fields(email = %user.email),
        err(level = "warn")
    )]
    async fn get_cart_by_user(&self, user: &User) -> Result<Cart, CartsServiceError> {
        self.carts
            .find_cart(&user.email)
            .await?
            .ok_or(CartsServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "carts.add_product",
        skip(self, user),
        fields(email = %user.email, product = %product),
        err(level = "warn")
    )]
    async fn add_product_to_cart(
        &self,
        user: &User,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let quantity = validate_quantity(quantity)?;

        let mut cart = match self.carts.find_cart(&user.email).await? {
            Some(cart) => cart,
            None => {
                let cart = self
                    .carts
                    .create_cart(&user.email)
                    .await
                    .map_err(CartsServiceError::CartCreation)?;

                info!(cart_uuid = %cart.uuid, "created cart");

                cart
            }
        };

        let product = self.catalog_product(product).await?;

        cart.add_item(product, quantity)?;

        let saved = self.carts.save_cart(&cart).await?;

        info!(cart_uuid = %saved.uuid, items = saved.items.len(), "added product to cart");

        Ok(saved)
    }

    #[tracing::instrument(
        name = "carts.update_product",
        skip(self, user),
        fields(email = %user.email, product = %product),
        err(level = "warn")
    )]
    async fn update_product_in_cart(
        &self,
        user: &User,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let quantity = validate_quantity(quantity)?;

        let mut cart = self.existing_cart(user).await?;

        let product = self.catalog_product(product).await?;

        cart.set_quantity(product.uuid, quantity)?;

        let saved = self.carts.save_cart(&cart).await?;

        info!(cart_uuid = %saved.uuid, "updated product quantity");

        Ok(saved)
    }

    #[tracing::instrument(
        name = "carts.delete_product",
        skip(self, user),
        fields(email = %user.email, product = %product),
        err(level = "warn")
    )]
    async fn delete_product_from_cart(
        &self,
        user: &User,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError> {
        let mut cart = self.existing_cart(user).await?;

        cart.remove_item(product)?;

        self.carts.save_cart(&cart).await?;

        info!(cart_uuid = %cart.uuid, "removed product from cart");

        Ok(())
    }

    #[tracing::instrument(
        name = "carts.checkout",
        skip(self, user),
        fields(email = %user.email),
        err(level = "warn")
    )]
    async fn checkout(&self, user: &mut User) -> Result<CheckoutReceipt, CartsServiceError> {
        let cart = self
            .carts
            .find_cart(&user.email)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        if cart.is_empty() {
            return Err(CartsServiceError::CartEmpty);
        }

        if !user.has_set_non_default_address() {
            return Err(CartsServiceError::AddressNotSet);
        }

        let total = cart.total()?;

        if total > user.wallet_money {
            return Err(CartsServiceError::InsufficientBalance);
        }

        let wallet_money = match self.carts.checkout(cart.uuid, &user.email, total).await? {
            CheckoutOutcome::Paid { wallet_money } => wallet_money,
            CheckoutOutcome::CartEmpty => return Err(CartsServiceError::CartEmpty),
            CheckoutOutcome::CartChanged => return Err(CartsServiceError::CartChanged),
            CheckoutOutcome::InsufficientBalance => {
                return Err(CartsServiceError::InsufficientBalance);
            }
        };

        user.wallet_money = wallet_money;

        info!(cart_uuid = %cart.uuid, total, wallet_money, "checked out cart");

        Ok(CheckoutReceipt {
            cart: cart.uuid,
            total,
            wallet_money,
        })
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's cart.
    async fn get_cart_by_user(&self, user: &User) -> Result<Cart, CartsServiceError>;

    /// Add a product to the user's cart, creating the cart on first use.
    async fn add_product_to_cart(
        &self,
        user: &User,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Replace the quantity of a product already in the user's cart.
    async fn update_product_in_cart(
        &self,
        user: &User,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a product from the user's cart.
    async fn delete_product_from_cart(
        &self,
        user: &User,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError>;

    /// Pay for the cart from the user's wallet and empty it.
    ///
    /// On success `user.wallet_money` holds the debited balance.
    async fn checkout(&self, user: &mut User) -> Result<CheckoutReceipt, CartsServiceError>;
}
