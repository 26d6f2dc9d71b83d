//! Account domain entities.

pub mod identity;
pub mod model;
pub mod role;

pub use identity::AccountIdentity;
pub use model::Account;
pub use role::AccountRole;
