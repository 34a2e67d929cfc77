//! Carts service errors.

use http::StatusCode;
use sqlx::Error;
use thiserror::Error;

use crate::domain::carts::models::MAX_QUANTITY;

/// Failures of cart operations. `Display` is the client-facing message.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("User does not have a cart")]
    NotFound,

    #[error("User does not have a cart. Add a product to create one")]
    NoCart,

    #[error("Cart is empty")]
    CartEmpty,

    #[error("Product doesn't exist in database")]
    ProductNotFound,

    #[error("Product already in cart. Use the cart sidebar to update or remove product from cart")]
    ProductAlreadyInCart,

    #[error("Product not in cart")]
    ProductNotInCart,

    #[error("Quantity must be between 1 and {}", MAX_QUANTITY)]
    InvalidQuantity,

    #[error("Address not set")]
    AddressNotSet,

    #[error("Wallet balance not sufficient to place order")]
    InsufficientBalance,

    #[error("Cart changed during checkout. Review the cart and try again")]
    CartChanged,

    #[error("Cart total is too large")]
    TotalOverflow,

    #[error("Failed to create cart")]
    CartCreation(#[source] Error),

    #[error("Storage error")]
    Sql(#[source] Error),
}

impl CartsServiceError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::NoCart
            | Self::CartEmpty
            | Self::ProductNotFound
            | Self::ProductAlreadyInCart
            | Self::ProductNotInCart
            | Self::InvalidQuantity
            | Self::AddressNotSet
            | Self::InsufficientBalance
            | Self::CartChanged
            | Self::TotalOverflow => StatusCode::BAD_REQUEST,
            Self::CartCreation(_) | Self::Sql(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cart_for_read_is_not_found() {
        assert_eq!(
            CartsServiceError::NotFound.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn rule_violations_are_bad_requests() {
        for error in [
            CartsServiceError::NoCart,
            CartsServiceError::CartEmpty,
            CartsServiceError::ProductNotFound,
            CartsServiceError::ProductAlreadyInCart,
            CartsServiceError::ProductNotInCart,
            CartsServiceError::InvalidQuantity,
            CartsServiceError::AddressNotSet,
            CartsServiceError::InsufficientBalance,
            CartsServiceError::CartChanged,
            CartsServiceError::TotalOverflow,
        ] {
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST, "{error}");
        }
    }

    #[test]
    fn storage_failures_are_internal_errors() {
        let creation = CartsServiceError::CartCreation(Error::PoolTimedOut);
        let storage = CartsServiceError::from(Error::PoolClosed);

        assert_eq!(creation.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn absent_and_empty_carts_have_distinct_messages() {
        assert_ne!(
            CartsServiceError::NoCart.to_string(),
            CartsServiceError::CartEmpty.to_string()
        );
    }

    #[test]
    fn quantity_message_names_the_upper_bound() {
        assert_eq!(
            CartsServiceError::InvalidQuantity.to_string(),
            "Quantity must be between 1 and 2147483647"
        );
    }
}
