/// Task list endpoints
///
/// # Endpoints
///
/// | Method | Path | Body | Success |
/// |---|---|---|---|
/// | GET | `/get_user` | none | 200 `{"<id>": {"task_text", "completed"}}` |
/// | POST | `/settask` | `[{"text": "buy milk"}]` | 201, empty |
/// | POST | `/deletetask` | `[{"id": 7}]` | 204, empty |
///
/// POST bodies must be JSON (`Content-Type: application/json`); anything
/// else is rejected with 400 before the repository is called.
///
/// # Errors
///
/// - `400 Bad Request`: Body missing, not JSON, or failing validation
/// - `404 Not Found`: Task (or owning user) does not exist
/// - `500 Internal Server Error`: Store failure

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use todolist_shared::repository::UserTasks;

/// Lists the default user's tasks
pub async fn get_user(State(state): State<AppState>) -> ApiResult<Json<UserTasks>> {
    let tasks = state.repository.get_user_tasks().await?;
    Ok(Json(tasks))
}

/// Adds a task from `[{"text": ...}]`
pub async fn set_task(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(payload) = payload?;

    state.repository.add_task(&payload).await?;

    Ok(StatusCode::CREATED)
}

/// Deletes the task named by `[{"id": ...}]`
pub async fn delete_task(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(payload) = payload?;

    state.repository.delete_task(&payload).await?;

    Ok(StatusCode::NO_CONTENT)
}
