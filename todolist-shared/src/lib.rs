//! # Todo List Shared Library
//!
//! Data model, persistence, and the task repository used by the API server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and embedded migrations
//! - `models`: Database models (`users`, `tasks`) and their queries
//! - `repository`: The `TaskRepository` contract, payload validation, and
//!   the PostgreSQL and in-memory implementations

pub mod db;
pub mod models;
pub mod repository;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
