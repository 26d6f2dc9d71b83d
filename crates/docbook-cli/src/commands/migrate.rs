//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use docbook_core::error::AppError;
use docbook_database::DatabasePool;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show migration status
    Status,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    let result = run(&args.command, &pool).await;
    pool.close().await;
    result
}

async fn run(command: &MigrateCommand, pool: &DatabasePool) -> Result<(), AppError> {
    match command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            docbook_database::migration::run_migrations(pool.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            if pool.health_check().await? {
                output::print_success("Database reachable.");
            }
            println!("Migration status:");
            for entry in docbook_database::migration::migration_status(pool.pool()).await? {
                let state = if entry.applied { "applied" } else { "pending" };
                println!("  {} - {} ({})", entry.version, entry.description, state);
            }
        }
    }

    Ok(())
}
