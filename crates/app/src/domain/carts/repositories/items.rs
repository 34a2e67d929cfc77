//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::try_get_amount,
    domain::{
        carts::models::{CartItem, CartUuid},
        products::models::{Product, ProductUuid},
    },
};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const CLEAR_CART_ITEMS_SQL: &str = include_str!("../sql/clear_cart_items.sql");
const INSERT_CART_ITEM_SQL: &str = include_str!("../sql/insert_cart_item.sql");

pub(super) async fn get_cart_items(
    tx: &mut Transaction<'_, Postgres>,
    cart: CartUuid,
) -> Result<Vec<CartItem>, sqlx::Error> {
    query_as::<Postgres, CartItem>(GET_CART_ITEMS_SQL)
        .bind(cart.into_uuid())
        .fetch_all(&mut **tx)
        .await
}

pub(super) async fn clear_cart_items(
    tx: &mut Transaction<'_, Postgres>,
    cart: CartUuid,
) -> Result<u64, sqlx::Error> {
    let rows_affected = query(CLEAR_CART_ITEMS_SQL)
        .bind(cart.into_uuid())
        .execute(&mut **tx)
        .await?
        .rows_affected();

    Ok(rows_affected)
}

/// Write `items` in order, replacing whatever the cart held before.
pub(super) async fn replace_cart_items(
    tx: &mut Transaction<'_, Postgres>,
    cart: CartUuid,
    items: &[CartItem],
) -> Result<(), sqlx::Error> {
    clear_cart_items(tx, cart).await?;

    for (position, item) in items.iter().enumerate() {
        let position = i32::try_from(position).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let quantity =
            i32::try_from(item.quantity).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query(INSERT_CART_ITEM_SQL)
            .bind(cart.into_uuid())
            .bind(item.product.uuid.into_uuid())
            .bind(quantity)
            .bind(position)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}

impl<'r> FromRow<'r, PgRow> for CartItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            product: Product {
                uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
                name: row.try_get("product_name")?,
                cost: try_get_amount(row, "product_cost")?,
                created_at: row
                    .try_get::<SqlxTimestamp, _>("product_created_at")?
                    .to_jiff(),
                updated_at: row
                    .try_get::<SqlxTimestamp, _>("product_updated_at")?
                    .to_jiff(),
            },
            quantity,
        })
    }
}
