//! Domain events emitted by DocBook operations.
//!
//! Events are broadcast by the session boundary and consumed by the
//! navigation layer and by audit logging.

pub mod session;

pub use session::SessionEvent;
