use std::io;

use clap::{Args, Subcommand};
use rusty_money::iso::Currency;

use super::CommandError;

mod create;
mod show;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Register a user with a wallet balance
    Create(create::CreateUserArgs),

    /// Show a user's wallet and address
    Show(show::ShowUserArgs),
}

pub(crate) async fn run(
    command: UserCommand,
    currency: &'static Currency,
    out: impl io::Write,
) -> Result<(), CommandError> {
    match command.command {
        UserSubcommand::Create(args) => create::run(args, currency, out).await,
        UserSubcommand::Show(args) => show::run(args, currency, out).await,
    }
}
