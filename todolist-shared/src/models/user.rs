/// User model and database operations
///
/// There is exactly one user in normal operation. It is created lazily the
/// first time any task operation needs an owner.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id BIGSERIAL PRIMARY KEY
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnection, PgExecutor};
use tracing::info;

/// Advisory lock key serializing default-user creation across connections
const DEFAULT_USER_LOCK_KEY: i64 = 0x746f_646f_7573_6572;

/// User model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Auto-assigned user ID
    pub id: i64,
}

impl User {
    /// Returns the user with the lowest ID, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_first<'e, E>(executor: E) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, User>("SELECT id FROM users ORDER BY id LIMIT 1")
            .fetch_optional(executor)
            .await
    }

    /// Returns the default user, creating it if the table is empty
    ///
    /// Must be called inside a transaction: the advisory lock is held until
    /// that transaction ends, so concurrent callers see the row created by
    /// whichever caller got the lock first.
    ///
    /// # Errors
    ///
    /// Returns an error if locking, reading or inserting fails
    pub async fn get_or_create_default(conn: &mut PgConnection) -> Result<Self, sqlx::Error> {
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(DEFAULT_USER_LOCK_KEY)
            .execute(&mut *conn)
            .await?;

        if let Some(user) = Self::find_first(&mut *conn).await? {
            return Ok(user);
        }

        let user = sqlx::query_as::<_, User>("INSERT INTO users DEFAULT VALUES RETURNING id")
            .fetch_one(&mut *conn)
            .await?;

        info!(user_id = user.id, "Created default user");
        Ok(user)
    }

    /// Counts user rows
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(executor)
            .await
    }

    /// Deletes a user and, through the foreign key, all of its tasks
    ///
    /// Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn delete<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
