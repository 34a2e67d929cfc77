//! Cart Models

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::{
        carts::errors::CartsServiceError,
        products::models::{Product, ProductUuid},
        users::Email,
    },
    uuids::TypedUuid,
};

/// Largest quantity a single cart item can hold (the stored column is an `INTEGER`).
pub const MAX_QUANTITY: u32 = i32::MAX as u32;

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Model
///
/// One cart exists per user email. Items keep the order they were added in and
/// hold at most one entry per product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub uuid: CartUuid,
    pub email: Email,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// CartItem Model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Cost of this line: product cost times quantity.
    pub fn line_total(&self) -> Option<u64> {
        self.product.cost.checked_mul(u64::from(self.quantity))
    }
}

/// Outcome of a successful checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutReceipt {
    pub cart: CartUuid,
    pub total: u64,
    pub wallet_money: u64,
}

/// What the store did with a checkout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The wallet was debited and the cart cleared.
    Paid { wallet_money: u64 },
    /// The cart held no items by the time it was locked.
    CartEmpty,
    /// The locked cart no longer adds up to the expected total.
    CartChanged,
    /// The wallet no longer covers the total.
    InsufficientBalance,
}

/// Reject quantities outside `1..=MAX_QUANTITY`.
///
/// # Errors
///
/// Returns [`CartsServiceError::InvalidQuantity`] for zero or oversized quantities.
pub fn validate_quantity(quantity: u32) -> Result<u32, CartsServiceError> {
    if quantity == 0 || quantity > MAX_QUANTITY {
        return Err(CartsServiceError::InvalidQuantity);
    }

    Ok(quantity)
}

impl Cart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn item(&self, product: ProductUuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.uuid == product)
    }

    #[must_use]
    pub fn contains(&self, product: ProductUuid) -> bool {
        self.item(product).is_some()
    }

    /// Append a new line for `product`.
    ///
    /// # Errors
    ///
    /// Fails if the product is already in the cart.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> Result<(), CartsServiceError> {
        if self.contains(product.uuid) {
            return Err(CartsServiceError::ProductAlreadyInCart);
        }

        self.items.push(CartItem { product, quantity });

        Ok(())
    }

    /// Replace the quantity of the line holding `product`.
    ///
    /// # Errors
    ///
    /// Fails if the product is not in the cart.
    pub fn set_quantity(
        &mut self,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<(), CartsServiceError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.product.uuid == product)
            .ok_or(CartsServiceError::ProductNotInCart)?;

        item.quantity = quantity;

        Ok(())
    }

    /// Remove the line holding `product`, returning it.
    ///
    /// # Errors
    ///
    /// Fails with [`CartsServiceError::CartEmpty`] on an empty cart and
    /// [`CartsServiceError::ProductNotInCart`] if no line holds the product.
    pub fn remove_item(&mut self, product: ProductUuid) -> Result<CartItem, CartsServiceError> {
        if self.is_empty() {
            return Err(CartsServiceError::CartEmpty);
        }

        let position = self
            .items
            .iter()
            .position(|item| item.product.uuid == product)
            .ok_or(CartsServiceError::ProductNotInCart)?;

        Ok(self.items.remove(position))
    }

    /// Sum of cost times quantity over every line.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::TotalOverflow`] if the sum does not fit in a `u64`.
    pub fn total(&self) -> Result<u64, CartsServiceError> {
        self.items.iter().try_fold(0_u64, |total, item| {
            item.line_total()
                .and_then(|line| total.checked_add(line))
                .ok_or(CartsServiceError::TotalOverflow)
        })
    }
}
