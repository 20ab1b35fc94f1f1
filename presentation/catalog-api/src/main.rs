use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod graphql {
        pub mod schema;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod server_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
    pub mod shutdown;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Catalog API entry point
///
/// - config/: environment-driven settings (server, CORS, database)
/// - setup/: dependency wiring and the HTTP server
/// - api/: REST routes, DTOs, error mapping and the GraphQL schema
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env();
    let pool = database_config::init_database().await?;
    let container = DependencyContainer::new(pool);

    Server::run(config, container).await?;

    Ok(())
}
