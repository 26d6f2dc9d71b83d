//! Password hashing and policy enforcement.

pub mod hasher;
pub mod validator;

pub use hasher::CredentialProvisioner;
pub use validator::PasswordValidator;
