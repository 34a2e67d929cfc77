//! Products errors.

use http::StatusCode;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsError {
    #[error("Product already exists")]
    AlreadyExists,

    #[error("Product not found")]
    NotFound,

    #[error("Invalid product data")]
    InvalidData,

    #[error("Storage error")]
    Sql(#[source] Error),
}

impl ProductsError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists | Self::InvalidData => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Sql(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ProductsError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
