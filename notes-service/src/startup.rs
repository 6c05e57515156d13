//! Application startup and lifecycle management.

use crate::config::NotesConfig;
use crate::handlers;
use crate::services::{NotesGenerator, TextGeneration};
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{http_trace_layer, metrics_middleware, request_id_middleware};
use service_core::observability::metrics_handler;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: NotesConfig,
    pub notes: Arc<NotesGenerator>,
}

/// Routes of the notes API.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(metrics_handler))
        .route("/notes/invoice", post(handlers::notes::invoice_notes))
        .route("/notes/reminder", post(handlers::notes::reminder))
        .route(
            "/notes/product-description",
            post(handlers::notes::product_description),
        )
        .route("/notes/trends", post(handlers::notes::invoice_trends))
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: NotesConfig) -> Result<Self, AppError> {
        let generation = TextGeneration::from_config(&config).map_err(|e| {
            tracing::error!("Failed to initialize text provider: {}", e);
            AppError::ConfigError(anyhow::anyhow!(e))
        })?;

        let notes = NotesGenerator::new(generation);
        Self::build_with_notes(config, notes).await
    }

    /// Build with an already resolved generator, e.g. one backed by a mock provider.
    pub async fn build_with_notes(
        config: NotesConfig,
        notes: NotesGenerator,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            e
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState {
            config,
            notes: Arc::new(notes),
        };

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        tracing::info!("notes-service listening on port {}", self.port);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
