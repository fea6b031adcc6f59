/// In-memory task repository
///
/// Mirrors the PostgreSQL repository's observable behavior: the default
/// user is created lazily, IDs are assigned sequentially starting at 1, and
/// deleting a user removes its tasks. Used by tests that should not need a
/// database.

use super::{NewTask, RepositoryError, RepositoryResult, TaskEntry, TaskRepository, UserTasks};
use crate::models::{task::Task, user::User};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
struct Store {
    users: BTreeSet<i64>,
    tasks: BTreeMap<i64, Task>,
    last_user_id: i64,
    last_task_id: i64,
}

impl Store {
    fn default_user(&mut self) -> User {
        if let Some(&id) = self.users.first() {
            return User { id };
        }

        self.last_user_id += 1;
        self.users.insert(self.last_user_id);
        debug!(user_id = self.last_user_id, "Created default user");
        User {
            id: self.last_user_id,
        }
    }
}

/// Task repository kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    store: Mutex<Store>,
    closed: AtomicBool,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later call fail with a store error, like a closed pool
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Number of user rows
    pub async fn user_count(&self) -> usize {
        self.store.lock().await.users.len()
    }

    /// Number of task rows across all users
    pub async fn task_count(&self) -> usize {
        self.store.lock().await.tasks.len()
    }

    /// Deletes a user and its tasks; returns `true` if the user existed
    pub async fn delete_user(&self, id: i64) -> bool {
        let mut store = self.store.lock().await;
        if !store.users.remove(&id) {
            return false;
        }
        store.tasks.retain(|_, task| task.user_id != id);
        true
    }

    fn check_open(&self) -> RepositoryResult<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(RepositoryError::Store(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_tasks(&self) -> RepositoryResult<UserTasks> {
        self.check_open()?;
        let mut store = self.store.lock().await;

        let user = store.default_user();
        Ok(store
            .tasks
            .values()
            .filter(|task| task.user_id == user.id)
            .map(|task| (task.id, TaskEntry::from(task.clone())))
            .collect())
    }

    async fn create_task(&self, task: NewTask) -> RepositoryResult<Task> {
        self.check_open()?;
        let mut store = self.store.lock().await;

        let user = store.default_user();
        store.last_task_id += 1;

        let created = Task {
            id: store.last_task_id,
            user_id: user.id,
            task_text: task.text,
            completed: false,
        };
        store.tasks.insert(created.id, created.clone());

        Ok(created)
    }

    async fn remove_task(&self, id: i64) -> RepositoryResult<()> {
        self.check_open()?;
        let mut store = self.store.lock().await;

        store
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::TaskNotFound(id))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.check_open()
    }
}
