use std::io;

use cartkeep_app::{config::DatabaseConfig, context::AppContext, domain::users::Email};
use clap::Args;
use rusty_money::iso::Currency;

use crate::cli::{CommandError, connect, render, require_user};

#[derive(Debug, Args)]
pub(crate) struct ShowUserArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User email address
    #[arg(long)]
    email: Email,
}

pub(crate) async fn run(
    args: ShowUserArgs,
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
    let user = require_user(ctx, email).await?;

    render::write_user(out, &user, currency)?;

    Ok(())
}
