use std::io;

use cartkeep_app::{
    config::DatabaseConfig,
    context::AppContext,
    domain::{products::models::ProductUuid, users::Email},
    errors::ApiError,
};
use clap::Args;
use rusty_money::iso::Currency;

use crate::cli::{CommandError, connect, render, require_user};

#[derive(Debug, Args)]
pub(crate) struct ChangeItemArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Cart owner's email address
    #[arg(long)]
    email: Email,

    /// Product UUID
    #[arg(long)]
    product: ProductUuid,

    /// Quantity to hold in the cart
    #[arg(long)]
    quantity: u32,
}

#[derive(Debug, Args)]
pub(crate) struct RemoveItemArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Cart owner's email address
    #[arg(long)]
    email: Email,

    /// Product UUID
    #[arg(long)]
    product: ProductUuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Add,
    Update,
}

pub(crate) async fn run_add(
    args: ChangeItemArgs,
    currency: &'static Currency,
    mut out: impl io::Write,
) -> Result<(), CommandError> {
    let ctx = connect(&args.database).await?;

    change(&ctx, Change::Add, &args, currency, &mut out).await
}

pub(crate) async fn run_update(
    args: ChangeItemArgs,
    currency: &'static Currency,
    mut out: impl io::Write,
) -> Result<(), CommandError> {
    let ctx = connect(&args.database).await?;

    change(&ctx, Change::Update, &args, currency, &mut out).await
}

pub(crate) async fn run_remove(
    args: RemoveItemArgs,
    mut out: impl io::Write,
) -> Result<(), CommandError> {
    let ctx = connect(&args.database).await?;

    remove(&ctx, &args, &mut out).await
}

async fn change(
    ctx: &AppContext,
    change: Change,
    args: &ChangeItemArgs,
    currency: &'static Currency,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let user = require_user(ctx, &args.email).await?;

    let cart = match change {
        Change::Add => {
            ctx.carts
                .add_product_to_cart(&user, args.product, args.quantity)
                .await
        }
        Change::Update => {
            ctx.carts
                .update_product_in_cart(&user, args.product, args.quantity)
                .await
        }
    }
    .map_err(ApiError::from)?;

    render::write_cart(out, &cart, currency)?;

    Ok(())
}

async fn remove(
    ctx: &AppContext,
    args: &RemoveItemArgs,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let user = require_user(ctx, &args.email).await?;

    ctx.carts
        .delete_product_from_cart(&user, args.product)
        .await
        .map_err(ApiError::from)?;

    writeln!(out, "removed {} from cart", args.product)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use cartkeep_app::domain::{
        carts::{
            CartsServiceError, MockCartsService,
            models::{Cart, CartUuid},
        },
        products::MockProductsRepository,
    };
    use http::StatusCode;
    use jiff::Timestamp;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::cli::test_support::{context, shopper, users_returning};

    use super::*;

    fn change_args(product: ProductUuid, quantity: u32) -> TestResult<ChangeItemArgs> {
        Ok(ChangeItemArgs {
            database: DatabaseConfig {
                database_url: "postgres://unused".to_string(),
            },
            email: Email::parse("shopper@example.com")?,
            product,
            quantity,
        })
    }

    #[tokio::test]
    async fn add_forwards_product_and_quantity() -> TestResult {
        let user = shopper()?;
        let product = ProductUuid::new();
        let cart = Cart {
            uuid: CartUuid::new(),
            email: user.email.clone(),
            items: Vec::new(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        let mut carts = MockCartsService::new();

        carts
            .expect_add_product_to_cart()
            .once()
            .withf(move |_, uuid, quantity| *uuid == product && *quantity == 3)
            .return_once(move |_, _, _| Ok(cart));
        carts.expect_update_product_in_cart().never();

        let ctx = context(carts, MockProductsRepository::new(), users_returning(user));

        change(&ctx, Change::Add, &change_args(product, 3)?, USD, &mut Vec::new()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn update_surfaces_rule_violations_as_bad_requests() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_product_in_cart()
            .once()
            .returning(|_, _, _| Err(CartsServiceError::ProductNotInCart));

        let ctx = context(carts, MockProductsRepository::new(), users_returning(shopper()?));

        let args = change_args(ProductUuid::new(), 2)?;

        let result = change(&ctx, Change::Update, &args, USD, &mut Vec::new()).await;

        match result {
            Err(CommandError::Api(error)) => {
                assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
                assert_eq!(error.message, "Product not in cart");
            }
            other => panic!("expected bad request, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn remove_reports_the_removed_product() -> TestResult {
        let product = ProductUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_delete_product_from_cart()
            .once()
            .withf(move |_, uuid| *uuid == product)
            .returning(|_, _| Ok(()));

        let ctx = context(carts, MockProductsRepository::new(), users_returning(shopper()?));

        let args = RemoveItemArgs {
            database: DatabaseConfig {
                database_url: "postgres://unused".to_string(),
            },
            email: Email::parse("shopper@example.com")?,
            product,
        };

        let mut out = Vec::new();

        remove(&ctx, &args, &mut out).await?;

        assert_eq!(
            String::from_utf8(out)?,
            format!("removed {product} from cart\n")
        );

        Ok(())
    }
}
