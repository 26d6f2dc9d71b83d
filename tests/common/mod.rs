//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use docbook::{
    AccountIdentity, AccountRole, CredentialProvisioner, CredentialService,
    MemoryClientStorage, MemoryCredentialStore, PasswordValidator, SessionBoundary,
};
use docbook_core::config::{AuthConfig, HashingConfig, SessionConfig};

/// An in-process DocBook credential stack.
pub struct TestApp {
    pub store: Arc<MemoryCredentialStore>,
    pub provisioner: CredentialProvisioner,
    pub service: CredentialService,
    pub storage: Arc<MemoryClientStorage>,
    pub session: SessionBoundary,
    pub session_config: SessionConfig,
}

impl TestApp {
    pub fn new() -> Self {
        // Low memory keeps debug-build hashing fast; cost is chosen per call.
        let provisioner = CredentialProvisioner::new(HashingConfig {
            default_cost: 2,
            memory_cost_kib: 1024,
            parallelism: 1,
        });
        let store = Arc::new(MemoryCredentialStore::new());
        let service = CredentialService::new(
            store.clone(),
            provisioner.clone(),
            PasswordValidator::new(&AuthConfig::default()),
        );
        let session_config = SessionConfig::default();
        let storage = Arc::new(MemoryClientStorage::new());
        let session = SessionBoundary::new(storage.clone(), &session_config);

        Self {
            store,
            provisioner,
            service,
            storage,
            session,
            session_config,
        }
    }

    pub fn identity(role: AccountRole, email: &str) -> AccountIdentity {
        AccountIdentity::new(role, email).unwrap()
    }

    /// Register an account with a known password.
    pub fn create_account(&self, role: AccountRole, email: &str, name: &str, password: &str) {
        let hash = self.provisioner.hash(password, 2).unwrap();
        self.store
            .register(&Self::identity(role, email), name, &hash)
            .unwrap();
    }
}
