//! Account identity value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

use docbook_core::AppError;

use super::role::AccountRole;

/// The key of a stored secret: a role partition plus an email unique
/// within it.
///
/// Emails are trimmed and lowercased on construction so that lookups are
/// case-insensitive everywhere an identity is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIdentity")]
pub struct AccountIdentity {
    role: AccountRole,
    email: String,
}

/// Wire shape of an identity before normalization.
#[derive(Deserialize)]
struct RawIdentity {
    role: AccountRole,
    email: String,
}

impl TryFrom<RawIdentity> for AccountIdentity {
    type Error = AppError;

    fn try_from(raw: RawIdentity) -> Result<Self, Self::Error> {
        Self::new(raw.role, &raw.email)
    }
}

impl AccountIdentity {
    /// Build an identity, normalizing and validating the email.
    pub fn new(role: AccountRole, email: &str) -> Result<Self, AppError> {
        let email = normalize_email(email);
        if !email.validate_email() {
            return Err(AppError::validation(format!(
                "Invalid email address: '{email}'"
            )));
        }
        Ok(Self { role, email })
    }

    /// The role partition.
    pub fn role(&self) -> AccountRole {
        self.role
    }

    /// The normalized email.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for AccountIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role, self.email)
    }
}

/// Canonical form used for email comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
