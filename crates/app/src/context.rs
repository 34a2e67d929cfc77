//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, DefaultCartsService, PgCartsRepository},
        products::{PgProductsRepository, ProductsRepository},
        users::{PgUsersRepository, UsersRepository},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub products: Arc<dyn ProductsRepository>,
    pub users: Arc<dyn UsersRepository>,
}

impl AppContext {
    /// Wire the `PostgreSQL` repositories and the carts service over one pool.
    #[must_use]
    pub fn new(db: Db) -> Self {
        let products: Arc<dyn ProductsRepository> = Arc::new(PgProductsRepository::new(db.clone()));

        Self {
            carts: Arc::new(DefaultCartsService::new(
                Arc::new(PgCartsRepository::new(db.clone())),
                Arc::clone(&products),
            )),
            products,
            users: Arc::new(PgUsersRepository::new(db)),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::new(Db::new(pool)))
    }
}
