/// PostgreSQL-backed task repository
///
/// Each operation runs in its own transaction and commits before returning.
/// Nothing is cached between calls.

use super::{NewTask, RepositoryError, RepositoryResult, TaskEntry, TaskRepository, UserTasks};
use crate::db::pool;
use crate::models::{task::Task, user::User};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

/// Task repository over a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Creates a repository using the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// A missing owner row is a not-found; anything else is a store failure
fn user_resolution_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::UserNotFound,
        other => RepositoryError::Store(other),
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list_tasks(&self) -> RepositoryResult<UserTasks> {
        let mut tx = self.pool.begin().await?;

        let user = User::get_or_create_default(&mut tx).await?;
        let tasks = Task::list_by_user(&mut *tx, user.id).await?;

        tx.commit().await?;

        debug!(user_id = user.id, count = tasks.len(), "Listed tasks");

        Ok(tasks
            .into_iter()
            .map(|task| (task.id, TaskEntry::from(task)))
            .collect())
    }

    async fn create_task(&self, task: NewTask) -> RepositoryResult<Task> {
        let mut tx = self.pool.begin().await?;

        let user = User::get_or_create_default(&mut tx)
            .await
            .map_err(user_resolution_error)?;

        let created = Task::create(&mut *tx, user.id, &task.text).await?;

        tx.commit().await?;

        info!(task_id = created.id, user_id = user.id, "Task created");
        Ok(created)
    }

    async fn remove_task(&self, id: i64) -> RepositoryResult<()> {
        if !Task::delete(&self.pool, id).await? {
            debug!(task_id = id, "Task to delete does not exist");
            return Err(RepositoryError::TaskNotFound(id));
        }

        info!(task_id = id, "Task deleted");
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        pool::health_check(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_user_row_maps_to_user_not_found() {
        assert!(matches!(
            user_resolution_error(sqlx::Error::RowNotFound),
            RepositoryError::UserNotFound
        ));
    }

    #[test]
    fn test_other_user_resolution_errors_are_store_failures() {
        assert!(matches!(
            user_resolution_error(sqlx::Error::PoolClosed),
            RepositoryError::Store(sqlx::Error::PoolClosed)
        ));
        assert!(matches!(
            user_resolution_error(sqlx::Error::PoolTimedOut),
            RepositoryError::Store(sqlx::Error::PoolTimedOut)
        ));
    }
}
