//! Credential storage and the flows built on it.

pub mod memory;
pub mod service;
pub mod store;

pub use memory::MemoryCredentialStore;
pub use service::CredentialService;
pub use store::CredentialStore;
