//! In-memory SQLite databases for adapter and HTTP tests

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::create_schema;

/// Connect to a fresh in-memory SQLite database with the schema applied.
///
/// The pool is capped at one connection: every connection to `:memory:`
/// would otherwise see its own empty database.
pub async fn sqlite_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    create_schema(&db).await.expect("Failed to create schema");
    db
}
