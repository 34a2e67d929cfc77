//! Client-facing errors.

use std::error::Error as StdError;

use http::StatusCode;
use thiserror::Error;
use tracing::error;

use crate::domain::{carts::CartsServiceError, products::ProductsError, users::UsersError};

/// A status code and the message shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status_code}: {message}")]
pub struct ApiError {
    pub status_code: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a typed error, logging the cause of server-side failures.
    fn from_typed<E: StdError>(status_code: StatusCode, error: &E) -> Self {
        if status_code.is_server_error() {
            match error.source() {
                Some(source) => error!(%source, "{error}"),
                None => error!("{error}"),
            }
        }

        Self::new(status_code, error.to_string())
    }
}

impl From<CartsServiceError> for ApiError {
    fn from(error: CartsServiceError) -> Self {
        Self::from_typed(error.status_code(), &error)
    }
}

impl From<UsersError> for ApiError {
    fn from(error: UsersError) -> Self {
        Self::from_typed(error.status_code(), &error)
    }
}

impl From<ProductsError> for ApiError {
    fn from(error: ProductsError) -> Self {
        Self::from_typed(error.status_code(), &error)
    }
}
