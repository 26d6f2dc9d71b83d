//! Credential flows: provisioning resets, login, and password changes.

use std::sync::Arc;

use tracing::{info, warn};

use docbook_core::error::{AppError, ErrorKind};
use docbook_core::result::AppResult;
use docbook_entity::account::AccountIdentity;
use docbook_entity::session::{Principal, SessionMarker};

use crate::password::{CredentialProvisioner, PasswordValidator};
use crate::session::SessionBoundary;

use super::store::CredentialStore;

/// Message returned for every failed login, so callers cannot tell a
/// missing account from a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Orchestrates the provisioner and a credential store.
#[derive(Debug, Clone)]
pub struct CredentialService {
    store: Arc<dyn CredentialStore>,
    provisioner: CredentialProvisioner,
    validator: PasswordValidator,
}

impl CredentialService {
    /// Creates a new credential service.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        provisioner: CredentialProvisioner,
        validator: PasswordValidator,
    ) -> Self {
        Self {
            store,
            provisioner,
            validator,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// The provisioner used for hashing.
    pub fn provisioner(&self) -> &CredentialProvisioner {
        &self.provisioner
    }

    /// Operator reset: hash `plaintext` and replace the account's secret.
    ///
    /// Uses `cost` when given, the configured default otherwise. The
    /// password policy is not applied; operators may set any non-empty
    /// credential.
    pub async fn reset_secret(
        &self,
        identity: &AccountIdentity,
        plaintext: &str,
        cost: Option<u32>,
    ) -> AppResult<()> {
        let cost = cost.unwrap_or_else(|| self.provisioner.default_cost());
        let hash = self.provisioner.hash(plaintext, cost)?;
        self.store.set_secret(identity, &hash).await?;

        info!(identity = %identity, cost, "Credential reset");
        Ok(())
    }

    /// Checks a submitted credential and returns the principal on success.
    ///
    /// Missing accounts and mismatches both fail with the same
    /// `Authentication` error, after the same amount of hashing work.
    /// Hashes weaker than the current policy are upgraded in place after a
    /// successful check.
    pub async fn authenticate(
        &self,
        identity: &AccountIdentity,
        plaintext: &str,
    ) -> AppResult<Principal> {
        let Some(account) = self.store.find_account(identity).await? else {
            self.provisioner.verify_decoy(plaintext);
            info!(identity = %identity, "Login rejected: unknown account");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.provisioner.verify(plaintext, &account.password_hash)? {
            info!(identity = %identity, "Login rejected: credential mismatch");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let cost = self.provisioner.default_cost();
        if self.provisioner.needs_rehash(&account.password_hash, cost) {
            self.upgrade_hash(identity, plaintext, cost).await;
        }

        info!(identity = %identity, "Login accepted");
        Ok(Principal::from_account(identity, &account))
    }

    /// Authenticates and, on success, records the session marker.
    pub async fn login(
        &self,
        session: &SessionBoundary,
        identity: &AccountIdentity,
        plaintext: &str,
    ) -> AppResult<SessionMarker> {
        let principal = self.authenticate(identity, plaintext).await?;
        session.begin(principal)
    }

    /// Self-service password change from the profile form.
    ///
    /// Requires the current password, applies the password policy, and
    /// stores a hash at the default cost.
    pub async fn change_secret(
        &self,
        identity: &AccountIdentity,
        current: &str,
        new: &str,
    ) -> AppResult<()> {
        self.authenticate(identity, current).await?;
        self.validator.validate(new)?;
        self.validator.validate_not_same(current, new)?;

        let hash = self.provisioner.hash_default(new)?;
        self.store.set_secret(identity, &hash).await?;

        info!(identity = %identity, "Credential changed by owner");
        Ok(())
    }

    async fn upgrade_hash(&self, identity: &AccountIdentity, plaintext: &str, cost: u32) {
        let result = match self.provisioner.hash(plaintext, cost) {
            Ok(hash) => self.store.set_secret(identity, &hash).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => info!(identity = %identity, cost, "Credential rehashed"),
            Err(e) if e.kind == ErrorKind::HashingFailure => {
                warn!(identity = %identity, error = %e, "Rehash failed")
            }
            Err(e) => warn!(identity = %identity, error = %e, "Storing rehashed credential failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::memory::MemoryCredentialStore;
    use docbook_core::config::{AuthConfig, HashingConfig};
    use docbook_entity::account::AccountRole;

    fn hashing() -> HashingConfig {
        HashingConfig {
            default_cost: 2,
            memory_cost_kib: 1024,
            parallelism: 1,
        }
    }

    fn service_with(store: Arc<MemoryCredentialStore>) -> CredentialService {
        CredentialService::new(
            store,
            CredentialProvisioner::new(hashing()),
            PasswordValidator::new(&AuthConfig::default()),
        )
    }

    fn seeded(email: &str, password: &str) -> (CredentialService, AccountIdentity) {
        let store = Arc::new(MemoryCredentialStore::new());
        let identity = AccountIdentity::new(AccountRole::Patient, email).unwrap();
        let hash = CredentialProvisioner::new(hashing()).hash(password, 2).unwrap();
        store.register(&identity, "Pat", &hash).unwrap();
        (service_with(store), identity)
    }

    #[tokio::test]
    async fn test_reset_then_authenticate() {
        let (service, identity) = seeded("pat@docbook.com", "initial-pass");

        service.reset_secret(&identity, "12345678", Some(1)).await.unwrap();

        let principal = service.authenticate(&identity, "12345678").await.unwrap();
        assert_eq!(principal.display_name, "Pat");
        assert_eq!(principal.role, AccountRole::Patient);
        assert!(service.authenticate(&identity, "initial-pass").await.is_err());
    }

    #[tokio::test]
    async fn test_reset_missing_account_is_not_found() {
        let service = service_with(Arc::new(MemoryCredentialStore::new()));
        let identity = AccountIdentity::new(AccountRole::Doctor, "missing@x.com").unwrap();

        let err = service.reset_secret(&identity, "12345678", None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_failed_logins_share_one_message() {
        let (service, identity) = seeded("pat@docbook.com", "right-pass");
        let unknown = AccountIdentity::new(AccountRole::Patient, "nobody@docbook.com").unwrap();

        let wrong = service.authenticate(&identity, "wrong-pass").await.unwrap_err();
        let missing = service.authenticate(&unknown, "right-pass").await.unwrap_err();

        assert_eq!(wrong.kind, ErrorKind::Authentication);
        assert_eq!(missing.kind, ErrorKind::Authentication);
        assert_eq!(wrong.message, missing.message);
        assert!(!wrong.message.contains("wrong-pass"));
    }

    #[tokio::test]
    async fn test_authenticate_upgrades_old_cost() {
        let (service, identity) = seeded("pat@docbook.com", "right-pass");
        service.reset_secret(&identity, "right-pass", Some(1)).await.unwrap();

        service.authenticate(&identity, "right-pass").await.unwrap();

        let stored = service.store().get_secret(&identity).await.unwrap();
        assert!(!service.provisioner().needs_rehash(&stored, 2));
        assert!(service.provisioner().verify("right-pass", &stored).unwrap());
    }

    #[tokio::test]
    async fn test_stronger_reset_survives_login() {
        let (service, identity) = seeded("pat@docbook.com", "right-pass");
        service.reset_secret(&identity, "right-pass", Some(4)).await.unwrap();
        let before = service.store().get_secret(&identity).await.unwrap();

        service.authenticate(&identity, "right-pass").await.unwrap();

        let after = service.store().get_secret(&identity).await.unwrap();
        assert_eq!(before, after);
        assert!(after.contains("t=4"));
    }

    #[tokio::test]
    async fn test_unknown_account_still_spends_hashing_work() {
        let service = service_with(Arc::new(MemoryCredentialStore::new()));
        let unknown = AccountIdentity::new(AccountRole::Doctor, "nobody@docbook.com").unwrap();
        assert!(!service.provisioner().has_decoy());

        let err = service.authenticate(&unknown, "guess").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Authentication);
        assert!(service.provisioner().has_decoy());
    }

    #[tokio::test]
    async fn test_change_secret_requires_current_password() {
        let (service, identity) = seeded("pat@docbook.com", "old-password");

        let err = service
            .change_secret(&identity, "not-the-password", "new-password")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);

        service
            .change_secret(&identity, "old-password", "new-password")
            .await
            .unwrap();
        assert!(service.authenticate(&identity, "new-password").await.is_ok());
    }

    #[tokio::test]
    async fn test_change_secret_applies_policy() {
        let (service, identity) = seeded("pat@docbook.com", "old-password");

        let short = service
            .change_secret(&identity, "old-password", "short")
            .await
            .unwrap_err();
        assert_eq!(short.kind, ErrorKind::Validation);

        let same = service
            .change_secret(&identity, "old-password", "old-password")
            .await
            .unwrap_err();
        assert_eq!(same.kind, ErrorKind::Validation);
    }
}
