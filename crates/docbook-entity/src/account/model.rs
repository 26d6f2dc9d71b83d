//! Account entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A patient or doctor row as seen by the credential store.
///
/// Registration and profile columns are owned by the web layer; only the
/// fields the credential flows need are mapped here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Email address, unique within the role's table.
    pub email: String,
    /// Human-readable name shown in navigation.
    #[sqlx(rename = "name")]
    pub display_name: String,
    /// Encoded Argon2id hash.
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
}
