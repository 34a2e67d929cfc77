use std::io;

use cartkeep_app::{
    config::DatabaseConfig,
    context::AppContext,
    domain::products::{
        ProductsError,
        models::{NewProduct, ProductUuid},
    },
    errors::ApiError,
};
use clap::Args;
use rusty_money::iso::Currency;
use tracing::info;

use crate::cli::{CommandError, connect, render};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Product display name
    #[arg(long)]
    name: String,

    /// Unit cost in minor units
    #[arg(long)]
    cost: u64,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    uuid: Option<ProductUuid>,
}

pub(crate) async fn run(
    args: CreateProductArgs,
    currency: &'static Currency,
    mut out: impl io::Write,
) -> Result<(), CommandError> {
    let ctx = connect(&args.database).await?;

    execute(&ctx, args, currency, &mut out).await
}

async fn execute(
    ctx: &AppContext,
    args: CreateProductArgs,
    currency: &'static Currency,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    if args.name.trim().is_empty() {
        return Err(ApiError::bad_request("name cannot be empty").into());
    }

    let product = ctx
        .products
        .create_product(NewProduct {
            uuid: args.uuid.unwrap_or_default(),
            name: args.name,
            cost: args.cost,
        })
        .await
        .map_err(|error| ApiError::from(ProductsError::from(error)))?;

    info!(product = %product.uuid, "created product");

    render::write_product(out, &product, currency)?;

    Ok(())
}
