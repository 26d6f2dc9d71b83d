//! The session marker context shared by navigation components.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use docbook_core::config::SessionConfig;
use docbook_core::events::SessionEvent;
use docbook_core::result::AppResult;
use docbook_core::traits::ClientStorage;
use docbook_entity::session::{Principal, SessionMarker};

/// Explicit handle on "is a principal authenticated in this client".
///
/// The marker lives in [`ClientStorage`] under a single fixed key as JSON.
/// Components receive a `SessionBoundary` (clones share storage and event
/// channel) instead of reading the storage key themselves.
///
/// Clearing the marker does not reach any server. A token issued alongside
/// it would stay valid until it expires on its own.
#[derive(Debug, Clone)]
pub struct SessionBoundary {
    storage: Arc<dyn ClientStorage>,
    key: String,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionBoundary {
    /// Creates a boundary over the given client storage.
    pub fn new(storage: Arc<dyn ClientStorage>, config: &SessionConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_channel_capacity.max(1));
        Self {
            storage,
            key: config.storage_key.clone(),
            events,
        }
    }

    /// Records a freshly authenticated principal, replacing any previous
    /// marker.
    pub fn begin(&self, principal: Principal) -> AppResult<SessionMarker> {
        if self.is_active() {
            debug!(key = %self.key, "Replacing existing session marker");
        }

        let marker = SessionMarker::new(principal);
        let encoded = serde_json::to_string(&marker)?;
        self.storage.set(&self.key, &encoded)?;

        info!(
            marker_id = %marker.id,
            role = %marker.principal.role,
            "Session marker stored"
        );
        self.publish(SessionEvent::Begun {
            marker_id: marker.id,
            role: marker.principal.role.to_string(),
            display_name: marker.principal.display_name.clone(),
        });

        Ok(marker)
    }

    /// Whether a readable marker is present.
    pub fn is_active(&self) -> bool {
        self.marker().is_some()
    }

    /// The principal behind the current marker, if any.
    pub fn current(&self) -> Option<Principal> {
        self.marker().map(|marker| marker.principal)
    }

    /// The current marker, if any.
    ///
    /// A marker that cannot be read or decoded is treated as absent.
    pub fn marker(&self) -> Option<SessionMarker> {
        let raw = match self.storage.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read session marker");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(marker) => Some(marker),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable session marker");
                None
            }
        }
    }

    /// Clears the marker.
    ///
    /// Idempotent: clearing an absent marker is a no-op. Returns whether a
    /// marker was removed. Never fails; storage errors are logged.
    pub fn end(&self) -> bool {
        let marker = self.marker();

        let removed = match self.storage.remove(&self.key) {
            Ok(removed) => removed,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to clear session marker");
                return false;
            }
        };

        debug!("Session marker cleared client-side only; no server revocation");

        match marker {
            Some(marker) if removed => {
                info!(marker_id = %marker.id, role = %marker.principal.role, "Session ended");
                self.publish(SessionEvent::Ended {
                    marker_id: marker.id,
                    role: marker.principal.role.to_string(),
                    display_name: marker.principal.display_name,
                });
                true
            }
            _ => removed,
        }
    }

    /// Subscribe to begin/end events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// The storage key holding the marker.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
