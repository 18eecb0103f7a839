
use crate::config::TaskboardConfig;
use crate::AppState;
use axum::body::Body;
use axum::response::Response;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;

pub fn test_config() -> TaskboardConfig {
    TaskboardConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        port: 0,
        cors_origin: "*".into(),
    }
}

// fresh in-memory database per test; max_connections(1) keeps the pool on
// the single connection that holds the data
pub async fn setup_test_pool() -> Pool<Sqlite> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse in-memory options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create in-memory database");

    crate::db::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}

pub async fn setup_test_state() -> AppState {
    AppState {
        pool: setup_test_pool().await,
        config: Arc::new(test_config()),
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Response body was not JSON")
}
