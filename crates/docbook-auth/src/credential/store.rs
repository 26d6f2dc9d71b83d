//! Credential store trait and its SQL implementation.

use async_trait::async_trait;

use docbook_core::error::AppError;
use docbook_core::result::AppResult;
use docbook_database::repositories::CredentialRepository;
use docbook_entity::account::{Account, AccountIdentity, AccountRole};

/// Persists one hashed secret per account identity.
///
/// Accounts are created out-of-band. Stores only ever replace the secret of
/// an existing account; they never create one.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Look up an account. Returns `None` if it does not exist.
    async fn find_account(&self, identity: &AccountIdentity) -> AppResult<Option<Account>>;

    /// Replace the stored hash of an existing account.
    ///
    /// Fails with `NotFound` when no account matches, without creating one.
    async fn set_secret(&self, identity: &AccountIdentity, hashed_secret: &str) -> AppResult<()>;

    /// List all accounts in a role's partition.
    async fn list_accounts(&self, role: AccountRole) -> AppResult<Vec<Account>>;

    /// Fetch the stored hash, or `NotFound`.
    async fn get_secret(&self, identity: &AccountIdentity) -> AppResult<String> {
        self.find_account(identity)
            .await?
            .map(|account| account.password_hash)
            .ok_or_else(|| account_not_found(identity))
    }
}

/// The `NotFound` error for an identity with no account.
pub fn account_not_found(identity: &AccountIdentity) -> AppError {
    AppError::not_found(format!(
        "No {} account for '{}'",
        identity.role(),
        identity.email()
    ))
}

#[async_trait]
impl CredentialStore for CredentialRepository {
    async fn find_account(&self, identity: &AccountIdentity) -> AppResult<Option<Account>> {
        self.find_by_email(identity.role(), identity.email()).await
    }

    async fn set_secret(&self, identity: &AccountIdentity, hashed_secret: &str) -> AppResult<()> {
        if self
            .update_password(identity.role(), identity.email(), hashed_secret)
            .await?
        {
            Ok(())
        } else {
            Err(account_not_found(identity))
        }
    }

    async fn list_accounts(&self, role: AccountRole) -> AppResult<Vec<Account>> {
        self.find_all(role).await
    }
}
