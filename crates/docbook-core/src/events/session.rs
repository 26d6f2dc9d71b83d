//! Session-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to the client session marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A principal authenticated and a marker was stored.
    Begun {
        /// The marker ID.
        marker_id: Uuid,
        /// Role of the principal.
        role: String,
        /// Display name of the principal.
        display_name: String,
    },
    /// The marker was cleared by an explicit logout.
    Ended {
        /// The marker ID.
        marker_id: Uuid,
        /// Role of the principal that logged out.
        role: String,
        /// Display name of the principal that logged out.
        display_name: String,
    },
}

impl SessionEvent {
    /// The marker this event refers to.
    pub fn marker_id(&self) -> Uuid {
        match self {
            Self::Begun { marker_id, .. } | Self::Ended { marker_id, .. } => *marker_id,
        }
    }
}
