//! # docbook-entity
//!
//! Domain entity models for DocBook credentials. Database rows derive
//! `sqlx::FromRow`; session values are plain serde types stored on the
//! client.

pub mod account;
pub mod session;
