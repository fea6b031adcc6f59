/// Task model and database operations
///
/// Tasks are created and deleted, never updated. Every task belongs to
/// exactly one user and disappears when that user is deleted.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id BIGSERIAL PRIMARY KEY,
///     user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     task_text VARCHAR(255) NOT NULL,
///     completed BOOLEAN NOT NULL DEFAULT FALSE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgExecutor;

/// Task model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Auto-assigned task ID
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    /// Task description, already trimmed
    pub task_text: String,

    /// Completion flag, `false` on creation
    pub completed: bool,
}

impl Task {
    /// Inserts a new, uncompleted task
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (unknown user, text too long, ...)
    pub async fn create<'e, E>(executor: E, user_id: i64, task_text: &str) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, task_text, completed)
            VALUES ($1, $2, FALSE)
            RETURNING id, user_id, task_text, completed
            "#,
        )
        .bind(user_id)
        .bind(task_text)
        .fetch_one(executor)
        .await
    }

    /// Finds a task by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            "SELECT id, user_id, task_text, completed FROM tasks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Lists all tasks owned by a user, ordered by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_by_user<'e, E>(executor: E, user_id: i64) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, task_text, completed
            FROM tasks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    /// Deletes a task
    ///
    /// Returns `true` if a row was removed, `false` if no task had that ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn delete<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
