use std::io;

use clap::{Args, Subcommand};
use rusty_money::iso::Currency;

use super::CommandError;

mod create;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Add a product to the catalog
    Create(create::CreateProductArgs),
}

pub(crate) async fn run(
    command: ProductCommand,
    currency: &'static Currency,
    out: impl io::Write,
) -> Result<(), CommandError> {
    match command.command {
        ProductSubcommand::Create(args) => create::run(args, currency, out).await,
    }
}
