//! Core traits defined in `docbook-core` and implemented by other crates.

pub mod client_storage;

pub use client_storage::ClientStorage;
