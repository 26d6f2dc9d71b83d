//! Session marker model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::principal::Principal;

/// Client-held evidence that a principal is authenticated.
///
/// Serialized as JSON under a single fixed storage key. The marker is not
/// known to any server; clearing it is the whole of logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMarker {
    /// Unique marker identifier.
    pub id: Uuid,
    /// The authenticated principal.
    #[serde(flatten)]
    pub principal: Principal,
    /// When the marker was created.
    pub issued_at: DateTime<Utc>,
}

impl SessionMarker {
    /// Create a marker for a freshly authenticated principal.
    pub fn new(principal: Principal) -> Self {
        Self {
            id: Uuid::new_v4(),
            principal,
            issued_at: Utc::now(),
        }
    }
}
