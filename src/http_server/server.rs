use crate::catalog::{CatalogLoader, RecordCache};
use crate::config::Config;
use crate::http_server::routes;
use crate::utils::ShutdownCoordinator;
use axum::{http::Method, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every handler
pub struct AppState {
    pub loader: CatalogLoader,
    pub config: Config,
}

pub struct HttpServer {
    config: Config,
    state: Arc<AppState>,
}

impl HttpServer {
    pub fn new(config: Config) -> Self {
        let cache = Arc::new(RecordCache::new(config.cache.enabled));
        let loader = CatalogLoader::new(&config.catalog, cache);
        let state = Arc::new(AppState {
            loader,
            config: config.clone(),
        });
        Self { config, state }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.create_router();

        let addr = SocketAddr::from((
            self.config.server.host.parse::<std::net::IpAddr>()?,
            self.config.server.port,
        ));

        info!("Starting HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        let shutdown = ShutdownCoordinator::new();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.wait_for_shutdown_signal().await })
            .await?;

        Ok(())
    }

    pub fn create_router(&self) -> Router {
        // Public discovery API: cross-origin reads are always allowed
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS]);

        Router::new()
            .route("/health", get(routes::health))
            .route("/search", get(routes::search_handler))
            .route("/badge/{*path}", get(routes::badge_handler))
            .route("/server", get(routes::missing_name_handler))
            .route("/server/", get(routes::missing_name_handler))
            .route("/server/{name}", get(routes::server_detail_handler))
            .route("/category", get(routes::category_handler))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }
}
