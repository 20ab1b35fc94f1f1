use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.invalid_connection_string")]
    InvalidConnectionString(#[source] sqlx::Error),
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Server-side limit for a single statement, applied to every pooled connection.
    pub statement_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            statement_timeout: Duration::from_secs(5),
        }
    }

    fn connect_options(&self) -> Result<PgConnectOptions, DatabaseError> {
        let options = self
            .connection_string
            .parse::<PgConnectOptions>()
            .map_err(DatabaseError::InvalidConnectionString)?;

        Ok(options.options([(
            "statement_timeout",
            self.statement_timeout.as_millis().to_string(),
        )]))
    }
}

/// Creates a PostgreSQL connection pool
///
/// Connects eagerly so an unreachable server is reported at startup.
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options()?)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    Ok(pool)
}
