use std::time::Duration;

use async_graphql_poem::GraphQL;
use poem::{
    EndpointExt, Route, Server as PoemServer, get, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::graphql::schema::graphiql;
use crate::setup::shutdown::shutdown_signal;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at(
                "/graphql",
                get(graphiql).post(GraphQL::new(container.graphql_schema)),
            )
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/", api_service)
            .with(config.cors)
            .with(Tracing);

        tracing::info!(%addr, "catalog api listening");
        tracing::info!("Swagger UI at http://{}/docs, GraphiQL at http://{}/graphql", addr, addr);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                shutdown_signal(),
                Some(SHUTDOWN_GRACE),
            )
            .await?;
        Ok(())
    }
}
