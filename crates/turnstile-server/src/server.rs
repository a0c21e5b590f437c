//! HTTP server implementation for the Turnstile queue service.
//!
//! Wires the queue store into an axum router and owns the server
//! lifecycle: configuration, shared state, and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use turnstile_core::{QueueStore, Result};

use crate::handlers;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".parse().unwrap(),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: self.addr.unwrap_or(defaults.addr),
            cors: self.cors.unwrap_or(defaults.cors),
        }
    }
}

/// Shared application state.
///
/// The store is guarded by a single mutex; request handlers take the
/// lock for the duration of one store operation and never across an
/// await point, which serializes all queue mutations.
pub struct AppState {
    /// The queue store.
    pub queue: Mutex<QueueStore>,
    /// Server configuration.
    pub config: ServerConfig,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates new app state with an empty queue.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            queue: Mutex::new(QueueStore::new()),
            config,
            start_time: Instant::now(),
        }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(config.clone()));
        Self { config, state }
    }

    /// Creates the router.
    fn router(&self) -> Router {
        let mut router = Router::new()
            // Service status endpoints
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/api/status", get(handlers::server_status))
            // Queue endpoints
            .route(
                "/queue",
                get(handlers::list_queue)
                    .post(handlers::enqueue)
                    .put(handlers::advance),
            )
            .route(
                "/queue/:id",
                get(handlers::get_queue_entry).delete(handlers::remove_queue_entry),
            )
            .with_state(self.state.clone());

        // Add middleware
        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot start.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, "Starting Turnstile server");
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(turnstile_core::Error::Io)?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| turnstile_core::Error::internal(e.to_string()))?;

        tracing::info!("Server shutdown complete");
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}
