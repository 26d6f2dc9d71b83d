//! # docbook-core
//!
//! Core crate for DocBook credentials. Contains the unified error system,
//! configuration schemas, the client storage trait,
//! and session domain events.
//!
//! This crate has **no** internal dependencies on other DocBook crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
