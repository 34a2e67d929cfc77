use std::io;

use clap::{Args, Subcommand};

use super::CommandError;

mod migrate;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations
    Migrate(migrate::MigrateArgs),
}

pub(crate) async fn run(command: DbCommand, out: impl io::Write) -> Result<(), CommandError> {
    match command.command {
        DbSubcommand::Migrate(args) => migrate::run(args, out).await,
    }
}
