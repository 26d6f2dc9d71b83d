//! # docbook-database
//!
//! MySQL connection management, migrations, and the credential repository
//! over the per-role account tables.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
