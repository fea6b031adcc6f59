/// Task repository
///
/// The repository is the only component that reads or writes task state.
/// It owns the "single implicit user" convention and the validation of
/// incoming payloads.
///
/// # Operations
///
/// | Operation | Success | Failures |
/// |---|---|---|
/// | `get_user_tasks()` | map of task id → entry | `Store` |
/// | `add_task(payload)` | created task | `Malformed`, `UserNotFound`, `Store` |
/// | `delete_task(payload)` | `()` | `Malformed`, `TaskNotFound`, `Store` |
///
/// Implementations provide the capability methods (`list_tasks`,
/// `create_task`, `remove_task`, `ping`); the payload-level operations are
/// provided on top of them so every store validates the same way.
///
/// # Example
///
/// ```
/// use todolist_shared::repository::{memory::InMemoryTaskRepository, TaskRepository};
/// use serde_json::json;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let repo = InMemoryTaskRepository::new();
///
/// let task = repo.add_task(&json!([{ "text": "buy milk" }])).await?;
/// let tasks = repo.get_user_tasks().await?;
/// assert_eq!(tasks[&task.id].task_text, "buy milk");
///
/// repo.delete_task(&json!([{ "id": task.id }])).await?;
/// assert!(repo.get_user_tasks().await?.is_empty());
/// # Ok(())
/// # }
/// ```

pub mod memory;
pub mod payload;
pub mod postgres;

pub use payload::{parse_task_id, NewTask};

use crate::models::task::Task;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Repository error types
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Request body has the wrong shape or fails field validation
    #[error("Malformed request: {0}")]
    Malformed(String),

    /// The owning user could not be resolved
    #[error("User not found")]
    UserNotFound,

    /// No task has the requested ID
    #[error("Task {0} not found")]
    TaskNotFound(i64),

    /// The store failed while reading or writing
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Repository result type alias
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Public view of a task, keyed by its ID in [`UserTasks`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Task text
    pub task_text: String,

    /// Completion flag
    pub completed: bool,
}

impl From<Task> for TaskEntry {
    fn from(task: Task) -> Self {
        Self {
            task_text: task.task_text,
            completed: task.completed,
        }
    }
}

/// All tasks of the default user, keyed by task ID
///
/// Serializes as a JSON object whose keys are the IDs as strings.
pub type UserTasks = BTreeMap<i64, TaskEntry>;

/// Data access contract for the task list
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists every task owned by the default user, creating the user if needed
    async fn list_tasks(&self) -> RepositoryResult<UserTasks>;

    /// Stores a validated task for the default user
    async fn create_task(&self, task: NewTask) -> RepositoryResult<Task>;

    /// Deletes a task by ID
    async fn remove_task(&self, id: i64) -> RepositoryResult<()>;

    /// Checks that the store is reachable
    async fn ping(&self) -> RepositoryResult<()>;

    /// Fetches the default user's tasks
    async fn get_user_tasks(&self) -> RepositoryResult<UserTasks> {
        self.list_tasks().await
    }

    /// Adds the task described by `[{"text": ...}]`
    async fn add_task(&self, payload: &Value) -> RepositoryResult<Task> {
        let task = NewTask::from_payload(payload)?;
        self.create_task(task).await
    }

    /// Deletes the task named by `[{"id": ...}]`
    async fn delete_task(&self, payload: &Value) -> RepositoryResult<()> {
        let id = parse_task_id(payload)?;
        self.remove_task(id).await
    }
}
