//! Session domain entities.

pub mod model;
pub mod principal;

pub use model::SessionMarker;
pub use principal::Principal;
