//! # docbook-auth
//!
//! Credential provisioning and the client session boundary for DocBook.
//!
//! ## Modules
//!
//! - `password` — Argon2id hashing with a caller-chosen work factor, plus policy checks
//! - `credential` — Credential store trait, in-memory and SQL stores, and the login/reset service
//! - `session` — Injectable session marker context and role navigation contexts

pub mod credential;
pub mod password;
pub mod session;

pub use credential::{CredentialService, CredentialStore, MemoryCredentialStore};
pub use password::{CredentialProvisioner, PasswordValidator};
pub use session::{MemoryClientStorage, RoleNavigation, SessionBoundary};
