//! # HTTP Server
//!
//! Builds the combined axum router over a shared store and runs it. The
//! store is seeded with the demo dataset at construction, so a fresh server
//! always starts with a usable baseline.

use std::net::SocketAddr;
use std::sync::{Arc, RwLock};

use axum::http::StatusCode;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::storage::Store;

use super::config::ServerConfig;
use super::courses::course_routes;
use super::response::ErrorResponse;
use super::students::student_routes;

/// Shared application state: the single store behind a lock
pub struct AppState {
    pub store: RwLock<Store>,
}

impl AppState {
    /// State with an empty store
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::new()),
        }
    }

    /// State with the demo dataset already seeded
    pub fn seeded() -> Self {
        let mut store = Store::new();
        store.seed();
        Self {
            store: RwLock::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// REST API server
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    /// Create a server with default configuration and a seeded store
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a server with custom configuration and a seeded store
    pub fn with_config(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::seeded());
        let router = Self::build_router(state, &config);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .nest("/students", student_routes(state.clone()))
            .nest("/courses", course_routes(state))
            .fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for in-process testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "listening");
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for ApiServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Unmatched-route fallback
async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}
