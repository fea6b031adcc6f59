/// Common test utilities for integration tests
///
/// Builds the router over an in-memory repository so the HTTP contract can
/// be exercised without a database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use todolist_api::app::{build_router, AppState};
use todolist_api::config::{ApiConfig, Config, DatabaseConfig, LogConfig, LogFormat};
use todolist_shared::repository::{memory::InMemoryTaskRepository, TaskRepository};
use tower::ServiceExt;

/// Test context holding the router and the repository behind it
pub struct TestContext {
    pub app: axum::Router,
    pub repository: Arc<InMemoryTaskRepository>,
}

/// Configuration that never touches the environment
pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "postgresql://localhost/unused".to_string(),
            max_connections: 1,
            run_migrations: false,
        },
        log: LogConfig {
            format: LogFormat::Pretty,
        },
    }
}

impl TestContext {
    /// Creates a context with an empty in-memory store
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let app = build_router(AppState::new(repository.clone(), test_config()));
        Self { app, repository }
    }

    /// Sends a request and returns the status and raw body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    /// GET /get_user, returning the status and the parsed body
    pub async fn get_user(&self) -> (StatusCode, Value) {
        let (status, body) = self
            .send(
                Request::builder()
                    .method("GET")
                    .uri("/get_user")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    /// POSTs a JSON body
    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Vec<u8>) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Number of tasks currently stored
    pub async fn task_count(&self) -> usize {
        self.repository.task_count().await
    }

    /// IDs of the stored tasks, via the repository
    pub async fn task_ids(&self) -> Vec<i64> {
        self.repository
            .get_user_tasks()
            .await
            .unwrap()
            .into_keys()
            .collect()
    }
}
