//! Users Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::{Db, to_db_amount, try_get_amount},
    domain::users::{
        email::Email,
        models::{NewUser, User},
    },
};

const FIND_USER_SQL: &str = include_str!("sql/find_user.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");

#[derive(Debug, Clone)]
pub struct PgUsersRepository {
    db: Db,
}

impl PgUsersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn find_user(&self, email: &Email) -> Result<Option<User>, sqlx::Error> {
        query_as::<Postgres, User>(FIND_USER_SQL)
            .bind(email.as_str())
            .fetch_optional(self.db.pool())
            .await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, sqlx::Error> {
        query_as::<Postgres, User>(CREATE_USER_SQL)
            .bind(user.email.as_str())
            .bind(user.name)
            .bind(to_db_amount(user.wallet_money)?)
            .bind(user.address)
            .fetch_one(self.db.pool())
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let email: String = row.try_get("email")?;

        let email = Email::parse(&email).map_err(|e| sqlx::Error::ColumnDecode {
            index: "email".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            email,
            name: row.try_get("name")?,
            wallet_money: try_get_amount(row, "wallet_money")?,
            address: row.try_get("address")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[automock]
#[async_trait]
/// User persistence operations.
pub trait UsersRepository: Send + Sync {
    /// Looks up a user by email.
    async fn find_user(&self, email: &Email) -> Result<Option<User>, sqlx::Error>;

    /// Creates a new user.
    async fn create_user(&self, user: NewUser) -> Result<User, sqlx::Error>;
}
