//! Credential provisioning commands.

use clap::{Args, Subcommand};

use docbook_auth::{CredentialService, CredentialStore};
use docbook_core::error::AppError;
use docbook_entity::account::{AccountIdentity, AccountRole};

use crate::output;

/// Arguments for credential commands
#[derive(Debug, Args)]
pub struct CredentialArgs {
    /// Credential subcommand
    #[command(subcommand)]
    pub command: CredentialCommand,
}

/// Credential subcommands
#[derive(Debug, Subcommand)]
pub enum CredentialCommand {
    /// Hash a new password and store it for an existing account
    Reset {
        /// Account role (patient or doctor)
        #[arg(short, long)]
        role: AccountRole,
        /// Account email
        #[arg(short, long)]
        email: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Work factor (defaults to hashing.default_cost)
        #[arg(long)]
        cost: Option<u32>,
    },
    /// Check a password against the stored hash
    Verify {
        /// Account role (patient or doctor)
        #[arg(short, long)]
        role: AccountRole,
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Password to check (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute credential commands
pub async fn execute(args: &CredentialArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let service = super::credential_service(&config, &pool);

    let result = run(&args.command, &service).await;
    pool.close().await;
    result
}

async fn run(command: &CredentialCommand, service: &CredentialService) -> Result<(), AppError> {
    match command {
        CredentialCommand::Reset {
            role,
            email,
            password,
            cost,
        } => {
            let identity = AccountIdentity::new(*role, email)?;

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("New password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            service.reset_secret(&identity, &password, *cost).await?;
            output::print_success(&format!("Password reset for {identity}"));
        }
        CredentialCommand::Verify {
            role,
            email,
            password,
        } => {
            let identity = AccountIdentity::new(*role, email)?;

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let stored = service.store().get_secret(&identity).await?;
            if service.provisioner().verify(&password, &stored)? {
                output::print_success(&format!("Password matches for {identity}"));
            } else {
                output::print_warning(&format!("Password does not match for {identity}"));
            }
        }
    }

    Ok(())
}
