//! CLI command definitions and dispatch.

pub mod account;
pub mod credential;
pub mod migrate;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use docbook_auth::{CredentialProvisioner, CredentialService, PasswordValidator};
use docbook_core::config::AppConfig;
use docbook_core::error::AppError;
use docbook_database::DatabasePool;
use docbook_database::repositories::CredentialRepository;

/// DocBook — credential administration
#[derive(Debug, Parser)]
#[command(name = "docbook", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Credential provisioning
    Credential(credential::CredentialArgs),
    /// Account listing
    Account(account::AccountArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Credential(args) => credential::execute(args, &self.config).await,
            Commands::Account(args) => account::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: build the credential service over the SQL store
pub fn credential_service(config: &AppConfig, pool: &DatabasePool) -> CredentialService {
    let repo = CredentialRepository::new(pool.pool().clone());
    CredentialService::new(
        Arc::new(repo),
        CredentialProvisioner::new(config.hashing.clone()),
        PasswordValidator::new(&config.auth),
    )
}
