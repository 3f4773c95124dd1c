//! PostgreSQL connection pool initialization.
//!
//! The pool is built once at startup with explicit options, injected into
//! every handler through [`crate::state::AppState`], and closed explicitly
//! on graceful shutdown.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 5)

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;

/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database is unreachable.
/// Called once during startup; there is nothing useful to do without a
/// database.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
