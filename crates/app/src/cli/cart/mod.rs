use std::io;

use clap::{Args, Subcommand};
use rusty_money::iso::Currency;

use super::CommandError;

mod checkout;
mod items;
mod show;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show a user's cart
    Show(show::ShowCartArgs),

    /// Add a product to a user's cart
    Add(items::ChangeItemArgs),

    /// Change the quantity of a product in a user's cart
    Update(items::ChangeItemArgs),

    /// Remove a product from a user's cart
    Remove(items::RemoveItemArgs),

    /// Pay for a user's cart from their wallet
    Checkout(checkout::CheckoutArgs),
}

pub(crate) async fn run(
    command: CartCommand,
    currency: &'static Currency,
    out: impl io::Write,
) -> Result<(), CommandError> {
    match command.command {
        CartSubcommand::Show(args) => show::run(args, currency, out).await,
        CartSubcommand::Add(args) => items::run_add(args, currency, out).await,
        CartSubcommand::Update(args) => items::run_update(args, currency, out).await,
        CartSubcommand::Remove(args) => items::run_remove(args, out).await,
        CartSubcommand::Checkout(args) => checkout::run(args, currency, out).await,
    }
}
