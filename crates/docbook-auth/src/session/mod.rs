//! Client session boundary and role navigation.

pub mod boundary;
pub mod navigation;
pub mod storage;

pub use boundary::SessionBoundary;
pub use navigation::{LogoutOutcome, NavigationState, RoleNavigation};
pub use storage::MemoryClientStorage;
