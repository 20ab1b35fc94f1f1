use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DB_URL: PostgreSQL connection string (required)
/// - DB_MAX_CONNECTIONS: Pool size (default: 5)
/// - DB_ACQUIRE_TIMEOUT_SECS: Wait for a free connection (default: 30)
/// - DB_STATEMENT_TIMEOUT_SECS: Per-statement limit on the server (default: 5)
///
/// # Errors
/// Returns error if DB_URL is not set or the server cannot be reached
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DB_URL").context("DB_URL must be set")?;
    let config = database_config(db_url, |key| env::var(key).ok());

    tracing::info!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout.as_secs(),
        statement_timeout_secs = config.statement_timeout.as_secs(),
        "connecting to database"
    );

    let pool = create_postgres_pool(&config)
        .await
        .context("failed to connect to the database")?;
    Ok(pool)
}

fn database_config(db_url: String, lookup: impl Fn(&str) -> Option<String>) -> DatabaseConfig {
    let defaults = DatabaseConfig::new(db_url);

    DatabaseConfig {
        max_connections: parse_or(lookup("DB_MAX_CONNECTIONS"), defaults.max_connections),
        acquire_timeout: Duration::from_secs(parse_or(
            lookup("DB_ACQUIRE_TIMEOUT_SECS"),
            defaults.acquire_timeout.as_secs(),
        )),
        statement_timeout: Duration::from_secs(parse_or(
            lookup("DB_STATEMENT_TIMEOUT_SECS"),
            defaults.statement_timeout.as_secs(),
        )),
        ..defaults
    }
}

/// Unset or unparsable values fall back to `default`.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or(default),
        None => default,
    }
}
