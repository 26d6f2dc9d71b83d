//! Database migration runner.

use sqlx::MySqlPool;
use sqlx::migrate::Migrator;
use sqlx::mysql::MySqlDatabaseError;
use tracing::info;

use docbook_core::error::{AppError, ErrorKind};

use crate::repositories::map_sqlx_error;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// MySQL `ER_NO_SUCH_TABLE`.
const ER_NO_SUCH_TABLE: u16 = 1146;

/// Whether a known migration has been applied.
#[derive(Debug, Clone)]
pub struct MigrationStatus {
    /// Migration version (timestamp prefix).
    pub version: i64,
    /// Human-readable description from the file name.
    pub description: String,
    /// Whether the migration has been applied successfully.
    pub applied: bool,
}

/// Run all pending database migrations.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Report each embedded migration and whether it has been applied.
pub async fn migration_status(pool: &MySqlPool) -> Result<Vec<MigrationStatus>, AppError> {
    let applied: Vec<i64> =
        match sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success = TRUE")
            .fetch_all(pool)
            .await
        {
            Ok(versions) => versions,
            // The bookkeeping table does not exist until the first run.
            Err(e) if is_missing_table(&e) => Vec::new(),
            Err(e) => return Err(map_sqlx_error("Failed to read migration status", e)),
        };

    Ok(MIGRATOR
        .iter()
        .map(|m| MigrationStatus {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect())
}

fn is_missing_table(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db
            .try_downcast_ref::<MySqlDatabaseError>()
            .is_some_and(|e| e.number() == ER_NO_SUCH_TABLE),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_table_counts_as_unmigrated() {
        assert!(!is_missing_table(&sqlx::Error::PoolTimedOut));
        assert!(!is_missing_table(&sqlx::Error::RowNotFound));

        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(!is_missing_table(&sqlx::Error::Io(refused)));
    }
}
