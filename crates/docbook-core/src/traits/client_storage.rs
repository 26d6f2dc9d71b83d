//! Ephemeral client-side key/value storage.

use crate::result::AppResult;

/// Keyed string storage scoped to a single client session (a browser tab's
/// session storage, or an in-process map).
///
/// Values are opaque strings; callers serialize structured values as JSON.
/// Implementations are synchronous because client storage never crosses a
/// process boundary.
pub trait ClientStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key is absent.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a value, replacing any previous value under the key.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Returns `true` if a value was present.
    fn remove(&self, key: &str) -> AppResult<bool>;

    /// Remove every key (an external "clear storage").
    fn clear(&self) -> AppResult<()>;
}
