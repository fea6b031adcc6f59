/// Database models
///
/// # Models
///
/// - `user`: The implicit account that owns every task
/// - `task`: Todo items
///
/// # Example
///
/// ```no_run
/// use todolist_shared::models::{task::Task, user::User};
/// use todolist_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let mut tx = pool.begin().await?;
/// let user = User::get_or_create_default(&mut tx).await?;
/// let task = Task::create(&mut *tx, user.id, "buy milk").await?;
/// tx.commit().await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
