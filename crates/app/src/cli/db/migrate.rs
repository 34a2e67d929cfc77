use std::io;

use cartkeep_app::{config::DatabaseConfig, database};
use clap::Args;
use tracing::info;

use crate::cli::CommandError;

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    #[command(flatten)]
    database: DatabaseConfig,
}

pub(crate) async fn run(args: MigrateArgs, mut out: impl io::Write) -> Result<(), CommandError> {
    let pool = database::connect(&args.database.database_url)
        .await
        .map_err(CommandError::Connect)?;

    database::migrate(&pool).await?;

    info!("migrations applied");

    writeln!(out, "migrations applied")?;

    Ok(())
}
