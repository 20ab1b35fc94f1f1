use poem::middleware::Cors;

use super::{cors_config, server_config::ServerConfig};

/// Listener and middleware settings. The database is configured separately
/// by [`super::database_config::init_database`] since it needs I/O.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();
        tracing::debug!(ip = %server.ip, port = server.port, "loaded server config");

        Self {
            server,
            cors: cors_config::init_cors(),
        }
    }
}
