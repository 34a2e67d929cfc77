use std::io;

use cartkeep_app::{
    config::{DatabaseConfig, DisplayConfig, LoggingConfig},
    context::{AppContext, AppInitError},
    domain::users::{Email, UsersError, models::User},
    errors::ApiError,
};
use clap::{Parser, Subcommand};
use sqlx::migrate::MigrateError;
use thiserror::Error;

mod cart;
mod db;
mod product;
mod render;
mod user;

#[derive(Debug, Parser)]
#[command(name = "cartkeep", about = "Cartkeep cart management CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(flatten)]
    display: DisplayConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    User(user::UserCommand),
    Product(product::ProductCommand),
    Cart(cart::CartCommand),
}

impl Cli {
    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub(crate) async fn run(self) -> Result<(), CommandError> {
        let currency = self.display.currency;
        let out = io::stdout();

        match self.command {
            Commands::Db(command) => db::run(command, out).await,
            Commands::User(command) => user::run(command, currency, out).await,
            Commands::Product(command) => product::run(command, currency, out).await,
            Commands::Cart(command) => cart::run(command, currency, out).await,
        }
    }
}

/// Why a command failed. Printed to stderr by `main`.
#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<AppInitError> for CommandError {
    fn from(error: AppInitError) -> Self {
        match error {
            AppInitError::Database(source) => Self::Connect(source),
        }
    }
}

pub(crate) async fn connect(database: &DatabaseConfig) -> Result<AppContext, CommandError> {
    Ok(AppContext::from_database_url(&database.database_url).await?)
}

/// Load the user a cart command acts for.
pub(crate) async fn require_user(ctx: &AppContext, email: &Email) -> Result<User, ApiError> {
    ctx.users
        .find_user(email)
        .await
        .map_err(UsersError::from)?
        .ok_or_else(|| UsersError::NotFound.into())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use cartkeep_app::{
        context::AppContext,
        domain::{
            carts::MockCartsService,
            products::MockProductsRepository,
            users::{Email, MockUsersRepository, models::User},
        },
    };
    use jiff::Timestamp;
    use testresult::TestResult;

    pub(crate) fn context(
        carts: MockCartsService,
        products: MockProductsRepository,
        users: MockUsersRepository,
    ) -> AppContext {
        AppContext {
            carts: Arc::new(carts),
            products: Arc::new(products),
            users: Arc::new(users),
        }
    }

    /// A user with a wallet and a configured address.
    pub(crate) fn shopper() -> TestResult<User> {
        Ok(User {
            email: Email::parse("shopper@example.com")?,
            name: "Shopper".to_string(),
            wallet_money: 500,
            address: "1 Main Street".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        })
    }

    pub(crate) fn users_returning(user: User) -> MockUsersRepository {
        let mut users = MockUsersRepository::new();

        users
            .expect_find_user()
            .once()
            .return_once(move |_| Ok(Some(user)));

        users
    }
}
