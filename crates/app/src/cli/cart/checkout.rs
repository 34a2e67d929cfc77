use std::io;

use cartkeep_app::{
    config::DatabaseConfig, context::AppContext, domain::users::Email, errors::ApiError,
};
use clap::Args;
use rusty_money::iso::Currency;

use crate::cli::{CommandError, connect, render, require_user};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Cart owner's email address
    #[arg(long)]
    email: Email,
}

pub(crate) async fn run(
    args: CheckoutArgs,
    currency: &'static Currency,
    mut out: impl io::Write,
) -> Result<(), CommandError> {
    let ctx = connect(&args.database).await?;

    execute(&ctx, &args.email, currency, &mut out).await
}

async fn execute(
    ctx: &AppContext,
    email: &Email,
    currency: &'static Currency,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let mut user = require_user(ctx, email).await?;

    let receipt = ctx
        .carts
        .checkout(&mut user)
        .await
        .map_err(ApiError::from)?;

    render::write_receipt(out, &receipt, currency)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use cartkeep_app::domain::{
        carts::{
            CartsServiceError, MockCartsService,
            models::{CartUuid, CheckoutReceipt},
        },
        products::MockProductsRepository,
    };
    use http::StatusCode;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::cli::test_support::{context, shopper, users_returning};

    use super::*;

    #[tokio::test]
    async fn prints_the_receipt() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_checkout().once().returning(|user| {
            user.wallet_money = 300;

            Ok(CheckoutReceipt {
                cart: CartUuid::new(),
                total: 200,
                wallet_money: 300,
            })
        });

        let ctx = context(carts, MockProductsRepository::new(), users_returning(shopper()?));

        let mut out = Vec::new();

        execute(&ctx, &Email::parse("shopper@example.com")?, USD, &mut out).await?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("$2.00"));
        assert!(output.contains("$3.00"));

        Ok(())
    }

    #[tokio::test]
    async fn insufficient_balance_is_a_bad_request() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_checkout()
            .once()
            .returning(|_| Err(CartsServiceError::InsufficientBalance));

        let ctx = context(carts, MockProductsRepository::new(), users_returning(shopper()?));

        let result = execute(
            &ctx,
            &Email::parse("shopper@example.com")?,
            USD,
            &mut Vec::new(),
        )
        .await;

        match result {
            Err(CommandError::Api(error)) => {
                assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
                assert_eq!(error.message, "Wallet balance not sufficient to place order");
            }
            other => panic!("expected bad request, got {other:?}"),
        }

        Ok(())
    }
}
