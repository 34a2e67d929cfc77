//! Users errors.

use http::StatusCode;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersError {
    #[error("User already exists")]
    AlreadyExists,

    #[error("User not found")]
    NotFound,

    #[error("Invalid user data")]
    InvalidData,

    #[error("Storage error")]
    Sql(#[source] Error),
}

impl UsersError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists | Self::InvalidData => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Sql(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for UsersError {
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
