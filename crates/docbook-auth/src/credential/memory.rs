//! In-memory credential store for tests and single-process embedding.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::info;

use docbook_core::error::AppError;
use docbook_core::result::AppResult;
use docbook_entity::account::{Account, AccountIdentity, AccountRole};

use super::store::{CredentialStore, account_not_found};

/// Credential store backed by a concurrent map keyed by identity.
///
/// Identities normalize their email, so lookups are case-insensitive just
/// like the SQL store.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    accounts: DashMap<AccountIdentity, Account>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account, standing in for the out-of-band signup flow.
    ///
    /// Fails with `Validation` for roles without a credential partition and
    /// with `Validation` if the account already exists.
    pub fn register(
        &self,
        identity: &AccountIdentity,
        display_name: &str,
        password_hash: &str,
    ) -> AppResult<()> {
        if identity.role().credential_table().is_none() {
            return Err(AppError::validation(format!(
                "Role '{}' has no credential partition",
                identity.role()
            )));
        }

        if self.accounts.contains_key(identity) {
            return Err(AppError::validation(format!(
                "Account '{identity}' already exists"
            )));
        }

        self.accounts.insert(
            identity.clone(),
            Account {
                email: identity.email().to_string(),
                display_name: display_name.to_string(),
                password_hash: password_hash.to_string(),
            },
        );
        info!(identity = %identity, "Account registered");
        Ok(())
    }

    /// Number of stored accounts across all roles.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_account(&self, identity: &AccountIdentity) -> AppResult<Option<Account>> {
        Ok(self.accounts.get(identity).map(|entry| entry.value().clone()))
    }

    async fn set_secret(&self, identity: &AccountIdentity, hashed_secret: &str) -> AppResult<()> {
        match self.accounts.get_mut(identity) {
            Some(mut entry) => {
                entry.password_hash = hashed_secret.to_string();
                Ok(())
            }
            None => Err(account_not_found(identity)),
        }
    }

    async fn list_accounts(&self, role: AccountRole) -> AppResult<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .filter(|entry| entry.key().role() == role)
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docbook_core::error::ErrorKind;

    fn identity(role: AccountRole, email: &str) -> AccountIdentity {
        AccountIdentity::new(role, email).unwrap()
    }

    #[tokio::test]
    async fn test_set_secret_on_missing_account_creates_nothing() {
        let store = MemoryCredentialStore::new();
        let missing = identity(AccountRole::Doctor, "missing@x.com");

        let err = store.set_secret(&missing, "$argon2id$fake").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(store.is_empty());
        assert!(store.find_account(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_secret() {
        let store = MemoryCredentialStore::new();
        let id = identity(AccountRole::Patient, "jane@docbook.com");
        store.register(&id, "Jane", "old").unwrap();

        store.set_secret(&id, "new").await.unwrap();
        assert_eq!(store.get_secret(&id).await.unwrap(), "new");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_partitions_are_disjoint() {
        let store = MemoryCredentialStore::new();
        let patient = identity(AccountRole::Patient, "sam@docbook.com");
        store.register(&patient, "Sam", "hash").unwrap();

        let doctor = identity(AccountRole::Doctor, "sam@docbook.com");
        let err = store.get_secret(&doctor).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_ignores_email_case() {
        let store = MemoryCredentialStore::new();
        store
            .register(&identity(AccountRole::Doctor, "House@Docbook.com"), "House", "h")
            .unwrap();

        let probe = identity(AccountRole::Doctor, "house@DOCBOOK.com");
        assert_eq!(store.get_secret(&probe).await.unwrap(), "h");
    }

    #[tokio::test]
    async fn test_admin_has_no_partition() {
        let store = MemoryCredentialStore::new();
        let admin = identity(AccountRole::Admin, "root@docbook.com");

        assert!(store.register(&admin, "Root", "h").is_err());
        let err = store.set_secret(&admin, "h").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_list_accounts_by_role() {
        let store = MemoryCredentialStore::new();
        store
            .register(&identity(AccountRole::Doctor, "b@x.com"), "B", "h")
            .unwrap();
        store
            .register(&identity(AccountRole::Doctor, "a@x.com"), "A", "h")
            .unwrap();
        store
            .register(&identity(AccountRole::Patient, "c@x.com"), "C", "h")
            .unwrap();

        let doctors = store.list_accounts(AccountRole::Doctor).await.unwrap();
        let emails: Vec<&str> = doctors.iter().map(|a| a.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }
}
