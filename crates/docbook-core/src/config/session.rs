//! Client session marker configuration.

use serde::{Deserialize, Serialize};

/// Settings for the client-side session boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed key under which the session marker is stored.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Unauthenticated landing route used after logout.
    #[serde(default = "default_login_route")]
    pub login_route: String,
    /// Capacity of the session event broadcast channel.
    #[serde(default = "default_event_capacity")]
    pub event_channel_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            login_route: default_login_route(),
            event_channel_capacity: default_event_capacity(),
        }
    }
}

fn default_storage_key() -> String {
    "docbook.session".to_string()
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_event_capacity() -> usize {
    16
}
