//! Credential repository over the per-role account tables.

use sqlx::MySqlPool;
use tracing::debug;

use docbook_core::result::AppResult;
use docbook_entity::account::{Account, AccountRole};

use super::map_sqlx_error;

/// Repository for reading and replacing stored secrets.
///
/// Patients and doctors live in separate tables. Every query takes the role
/// and resolves the table from it; roles without a credential table behave
/// as if the account does not exist.
#[derive(Debug, Clone)]
pub struct CredentialRepository {
    pool: MySqlPool,
}

impl CredentialRepository {
    /// Create a new credential repository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Find an account by email (case-insensitive) within a role's table.
    pub async fn find_by_email(&self, role: AccountRole, email: &str) -> AppResult<Option<Account>> {
        let Some(table) = role.credential_table() else {
            return Ok(None);
        };

        sqlx::query_as::<_, Account>(&select_by_email_sql(table))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find account by email", e))
    }

    /// Replace the stored hash for one account.
    ///
    /// Returns `false` when no row matched. Never inserts.
    pub async fn update_password(
        &self,
        role: AccountRole,
        email: &str,
        password_hash: &str,
    ) -> AppResult<bool> {
        let Some(table) = role.credential_table() else {
            return Ok(false);
        };

        let result = sqlx::query(&update_password_sql(table))
            .bind(password_hash)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to update password", e))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // MySQL reports zero affected rows when the new value equals the old.
        debug!(%role, "No rows changed by password update, checking existence");
        Ok(self.find_by_email(role, email).await?.is_some())
    }

    /// List every account in a role's table, ordered by email.
    pub async fn find_all(&self, role: AccountRole) -> AppResult<Vec<Account>> {
        let Some(table) = role.credential_table() else {
            return Ok(Vec::new());
        };

        sqlx::query_as::<_, Account>(&list_sql(table))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list accounts", e))
    }
}

// Table names come from `AccountRole::credential_table`, never from input.

fn select_by_email_sql(table: &str) -> String {
    format!("SELECT email, name, password FROM {table} WHERE LOWER(email) = LOWER(?) LIMIT 1")
}

fn update_password_sql(table: &str) -> String {
    format!("UPDATE {table} SET password = ? WHERE LOWER(email) = LOWER(?)")
}

fn list_sql(table: &str) -> String {
    format!("SELECT email, name, password FROM {table} ORDER BY email ASC")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_target_role_table() {
        let table = AccountRole::Doctor.credential_table().unwrap();
        assert_eq!(
            select_by_email_sql(table),
            "SELECT email, name, password FROM doctors WHERE LOWER(email) = LOWER(?) LIMIT 1"
        );
        assert_eq!(
            update_password_sql(table),
            "UPDATE doctors SET password = ? WHERE LOWER(email) = LOWER(?)"
        );
    }

    #[test]
    fn test_update_binds_hash_before_email() {
        let sql = update_password_sql("patients");
        let set = sql.find("password = ?").unwrap();
        let filter = sql.find("LOWER(?)").unwrap();
        assert!(set < filter);
    }
}
