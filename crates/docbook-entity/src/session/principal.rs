//! Authenticated principal.

use serde::{Deserialize, Serialize};

use crate::account::{Account, AccountIdentity, AccountRole};

/// The identity a session marker vouches for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Name shown by the navigation components.
    pub display_name: String,
    /// Role used to pick a dashboard and gate routes.
    pub role: AccountRole,
    /// Normalized email of the account.
    pub email: String,
}

impl Principal {
    /// Build a principal for an authenticated account.
    pub fn from_account(identity: &AccountIdentity, account: &Account) -> Self {
        Self {
            display_name: account.display_name.clone(),
            role: identity.role(),
            email: identity.email().to_string(),
        }
    }
}
