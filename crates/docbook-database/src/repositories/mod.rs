//! Repository implementations for DocBook account tables.

pub mod credential;

pub use credential::CredentialRepository;

use docbook_core::error::{AppError, ErrorKind};

/// Map a sqlx error onto the application taxonomy.
///
/// Failures to reach the database become `StoreUnavailable`; everything
/// else is a `Database` error.
pub(crate) fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    let kind = match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => ErrorKind::StoreUnavailable,
        _ => ErrorKind::Database,
    };
    AppError::with_source(kind, format!("{context}: {err}"), err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_store_maps_to_store_unavailable() {
        let err = map_sqlx_error("Failed to find account", sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind, ErrorKind::StoreUnavailable);

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = map_sqlx_error("Failed to update password", sqlx::Error::Io(io));
        assert_eq!(err.kind, ErrorKind::StoreUnavailable);
    }

    #[test]
    fn test_query_failures_map_to_database() {
        let err = map_sqlx_error("Failed to list accounts", sqlx::Error::RowNotFound);
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(err.message.starts_with("Failed to list accounts"));
    }
}
