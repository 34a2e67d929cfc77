use std::io;

use cartkeep_app::{
    config::DatabaseConfig,
    context::AppContext,
    domain::users::{
        Email, UsersError,
        models::{DEFAULT_ADDRESS, DEFAULT_WALLET_MONEY, NewUser},
    },
    errors::ApiError,
};
use clap::Args;
use rusty_money::iso::Currency;
use tracing::info;

use crate::cli::{CommandError, connect, render};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User email address
    #[arg(long)]
    email: Email,

    /// Display name
    #[arg(long)]
    name: String,

    /// Starting wallet balance in minor units
    #[arg(long, default_value_t = DEFAULT_WALLET_MONEY)]
    wallet_money: u64,

    /// Delivery address; checkout is refused until one is set
    #[arg(long, default_value = DEFAULT_ADDRESS)]
    address: String,
}

pub(crate) async fn run(
    args: CreateUserArgs,
    currency: &'static Currency,
    mut out: impl io::Write,
) -> Result<(), CommandError> {
    let ctx = connect(&args.database).await?;

    execute(&ctx, args, currency, &mut out).await
}

async fn execute(
    ctx: &AppContext,
    args: CreateUserArgs,
    currency: &'static Currency,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    if args.name.trim().is_empty() {
        return Err(ApiError::bad_request("name cannot be empty").into());
    }

    let user = ctx
        .users
        .create_user(NewUser {
            email: args.email,
            name: args.name,
            wallet_money: args.wallet_money,
            address: args.address,
        })
        .await
        .map_err(|error| ApiError::from(UsersError::from(error)))?;

    info!(email = %user.email, "created user");

    render::write_user(out, &user, currency)?;

    Ok(())
}
