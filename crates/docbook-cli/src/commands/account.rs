//! Account listing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use docbook_auth::{CredentialService, CredentialStore};
use docbook_core::error::AppError;
use docbook_entity::account::AccountRole;

/// Arguments for account commands
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Account subcommand
    #[command(subcommand)]
    pub command: AccountCommand,
}

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// List accounts in a role's table
    List {
        /// Account role (patient or doctor)
        #[arg(short, long)]
        role: AccountRole,
    },
}

/// Account display row for table output
#[derive(Debug, Serialize, Tabled)]
struct AccountRow {
    /// Email
    email: String,
    /// Display name
    name: String,
    /// Hash algorithm
    algorithm: String,
}

/// Execute account commands
pub async fn execute(
    args: &AccountArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let service = super::credential_service(&config, &pool);

    let result = run(&args.command, &service, format).await;
    pool.close().await;
    result
}

async fn run(
    command: &AccountCommand,
    service: &CredentialService,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        AccountCommand::List { role } => {
            if role.credential_table().is_none() {
                output::print_warning(&format!("Role '{role}' has no credential table"));
            }

            let rows: Vec<AccountRow> = service
                .store()
                .list_accounts(*role)
                .await?
                .into_iter()
                .map(|a| AccountRow {
                    algorithm: hash_algorithm(&a.password_hash).to_string(),
                    email: a.email,
                    name: a.display_name,
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}

/// The algorithm tag of an encoded hash, without exposing the hash itself.
fn hash_algorithm(encoded: &str) -> &str {
    encoded
        .strip_prefix('$')
        .and_then(|rest| rest.split('$').next())
        .filter(|tag| !tag.is_empty())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_algorithm() {
        assert_eq!(hash_algorithm("$argon2id$v=19$m=19456,t=10,p=1$c2FsdA$ZGlnZXN0"), "argon2id");
        assert_eq!(hash_algorithm("$2b$10$abcdefghijklmnopqrstuv"), "2b");
        assert_eq!(hash_algorithm("12345678"), "unknown");
    }
}
