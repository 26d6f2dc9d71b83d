//! # docbook
//!
//! Credential provisioning and the client session boundary for the DocBook
//! appointment-booking application.
//!
//! The web layer calls into three pieces:
//!
//! - [`CredentialProvisioner`] hashes and verifies credentials (Argon2id).
//! - [`CredentialStore`] keeps one hash per (role, email); the SQL
//!   implementation is [`CredentialRepository`].
//! - [`SessionBoundary`] holds the client-side session marker that role
//!   navigation contexts ([`RoleNavigation`]) read and clear.

pub use docbook_auth::credential::store::account_not_found;
pub use docbook_auth::session::{LogoutOutcome, NavigationState};
pub use docbook_auth::{
    CredentialProvisioner, CredentialService, CredentialStore, MemoryClientStorage,
    MemoryCredentialStore, PasswordValidator, RoleNavigation, SessionBoundary,
};
pub use docbook_core::config::AppConfig;
pub use docbook_core::error::{AppError, ErrorKind};
pub use docbook_core::events::SessionEvent;
pub use docbook_core::result::AppResult;
pub use docbook_core::traits::ClientStorage;
pub use docbook_database::DatabasePool;
pub use docbook_database::repositories::CredentialRepository;
pub use docbook_entity::account::{Account, AccountIdentity, AccountRole};
pub use docbook_entity::session::{Principal, SessionMarker};
