//! Carts Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use tracing::debug;

use crate::{
    database::{Db, to_db_amount},
    domain::{
        carts::models::{Cart, CartUuid, CheckoutOutcome},
        users::Email,
    },
};

use super::{CartsRepository, items};

const FIND_CART_SQL: &str = include_str!("../sql/find_cart.sql");
const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const LOCK_CART_SQL: &str = include_str!("../sql/lock_cart.sql");
const TOUCH_CART_SQL: &str = include_str!("../sql/touch_cart.sql");
const DEBIT_WALLET_SQL: &str = include_str!("../sql/debit_wallet.sql");

#[derive(Debug, Clone)]
pub struct PgCartsRepository {
    db: Db,
}

impl PgCartsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    async fn lock_cart(
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(LOCK_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    async fn touch_cart(
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(TOUCH_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

#[async_trait]
impl CartsRepository for PgCartsRepository {
    async fn find_cart(&self, email: &Email) -> Result<Option<Cart>, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let cart = query_as::<Postgres, Cart>(FIND_CART_SQL)
            .bind(email.as_str())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(mut cart) = cart else {
            tx.commit().await?;

            return Ok(None);
        };

        cart.items = items::get_cart_items(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(Some(cart))
    }

    async fn create_cart(&self, email: &Email) -> Result<Cart, sqlx::Error> {
        let created = query_as::<Postgres, Cart>(CREATE_CART_SQL)
            .bind(CartUuid::new().into_uuid())
            .bind(email.as_str())
            .fetch_optional(self.db.pool())
            .await?;

        if let Some(cart) = created {
            return Ok(cart);
        }

        debug!(%email, "cart already exists, loading it");

        self.find_cart(email).await?.ok_or(sqlx::Error::RowNotFound)
    }

    async fn save_cart(&self, cart: &Cart) -> Result<Cart, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        Self::lock_cart(&mut tx, cart.uuid)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        items::replace_cart_items(&mut tx, cart.uuid, &cart.items).await?;

        let mut saved = Self::touch_cart(&mut tx, cart.uuid).await?;

        saved.items = items::get_cart_items(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn checkout(
        &self,
        cart: CartUuid,
        email: &Email,
        total: u64,
    ) -> Result<CheckoutOutcome, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let Some(mut locked) = Self::lock_cart(&mut tx, cart).await? else {
            tx.rollback().await?;

            return Ok(CheckoutOutcome::CartChanged);
        };

        locked.items = items::get_cart_items(&mut tx, cart).await?;

        if locked.is_empty() {
            debug!(cart_uuid = %cart, "locked cart has no items");

            tx.rollback().await?;

            return Ok(CheckoutOutcome::CartEmpty);
        }

        if locked.total().ok() != Some(total) {
            debug!(cart_uuid = %cart, total, "locked cart total differs");

            tx.rollback().await?;

            return Ok(CheckoutOutcome::CartChanged);
        }

        let balance: Option<i64> = query_scalar(DEBIT_WALLET_SQL)
            .bind(email.as_str())
            .bind(to_db_amount(total)?)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(balance) = balance else {
            debug!(%email, total, "wallet debit guard matched no row");

            tx.rollback().await?;

            return Ok(CheckoutOutcome::InsufficientBalance);
        };

        let cleared = items::clear_cart_items(&mut tx, cart).await?;

        query(TOUCH_CART_SQL)
            .bind(cart.into_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(cart_uuid = %cart, cleared, "cart cleared after checkout");

        u64::try_from(balance)
            .map(|wallet_money| CheckoutOutcome::Paid { wallet_money })
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "wallet_money".to_string(),
                source: Box::new(e),
            })
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let email: String = row.try_get("email")?;

        let email = Email::parse(&email).map_err(|e| sqlx::Error::ColumnDecode {
            index: "email".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            email,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
