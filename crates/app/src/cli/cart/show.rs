use std::io;

use cartkeep_app::{
    config::DatabaseConfig, context::AppContext, domain::users::Email, errors::ApiError,
};
use clap::Args;
use rusty_money::iso::Currency;

use crate::cli::{CommandError, connect, render, require_user};

#[derive(Debug, Args)]
pub(crate) struct ShowCartArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Cart owner's email address
    #[arg(long)]
    email: Email,

    /// Print the cart as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run(
    args: ShowCartArgs,
    currency: &'static Currency,
    mut out: impl io::Write,
) -> Result<(), CommandError> {
    let ctx = connect(&args.database).await?;

    execute(&ctx, &args, currency, &mut out).await
}

async fn execute(
    ctx: &AppContext,
    args: &ShowCartArgs,
    currency: &'static Currency,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let user = require_user(ctx, &args.email).await?;

    let cart = ctx
        .carts
        .get_cart_by_user(&user)
        .await
        .map_err(ApiError::from)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &cart)?;
        writeln!(out)?;
    } else {
        render::write_cart(out, &cart, currency)?;
    }

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

    fn args(json: bool) -> TestResult<ShowCartArgs> {
        Ok(ShowCartArgs {
            database: DatabaseConfig {
                database_url: "postgres://unused".to_string(),
            },
            email: Email::parse("shopper@example.com")?,
            json,
        })
    }

    #[tokio::test]
    async fn missing_cart_surfaces_not_found() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart_by_user()
            .once()
            .returning(|_| Err(CartsServiceError::NotFound));

        let ctx = context(carts, MockProductsRepository::new(), users_returning(shopper()?));

        let result = execute(&ctx, &args(false)?, USD, &mut Vec::new()).await;

        match result {
            Err(CommandError::Api(error)) => {
                assert_eq!(error.status_code, StatusCode::NOT_FOUND);
                assert_eq!(error.message, "User does not have a cart");
            }
            other => panic!("expected not found, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn json_output_carries_the_cart() -> TestResult {
        let user = shopper()?;
        let cart = Cart {
            uuid: CartUuid::new(),
            email: user.email.clone(),
            items: Vec::new(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };
        let cart_uuid = cart.uuid;

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart_by_user()
            .once()
            .return_once(move |_| Ok(cart));

        let ctx = context(carts, MockProductsRepository::new(), users_returning(user));

        let mut out = Vec::new();

        execute(&ctx, &args(true)?, USD, &mut out).await?;

        let value: serde_json::Value = serde_json::from_slice(&out)?;

        assert_eq!(value["uuid"], cart_uuid.to_string());
        assert_eq!(value["email"], "shopper@example.com");
        assert_eq!(value["items"], serde_json::json!([]));

        Ok(())
    }
}
