//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a DocBook principal can hold.
///
/// Patients and doctors keep their credentials in disjoint tables. Admins
/// are provisioned outside the credential store and have no partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// A patient booking appointments.
    Patient,
    /// A doctor receiving appointments.
    Doctor,
    /// A site administrator.
    Admin,
}

impl AccountRole {
    /// Every role, in display order.
    pub const ALL: [AccountRole; 3] = [Self::Admin, Self::Doctor, Self::Patient];

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Admin => "admin",
        }
    }

    /// Table holding this role's credentials, if the role has one.
    pub fn credential_table(&self) -> Option<&'static str> {
        match self {
            Self::Patient => Some("patients"),
            Self::Doctor => Some("doctors"),
            Self::Admin => None,
        }
    }

    /// Dashboard route a principal of this role lands on after login.
    pub fn landing_route(&self) -> &'static str {
        match self {
            Self::Patient => "/patient",
            Self::Doctor => "/doctor",
            Self::Admin => "/admin",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = docbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "patient" => Ok(Self::Patient),
            "doctor" => Ok(Self::Doctor),
            "admin" => Ok(Self::Admin),
            _ => Err(docbook_core::AppError::validation(format!(
                "Invalid account role: '{s}'. Expected one of: patient, doctor, admin"
            ))),
        }
    }
}
