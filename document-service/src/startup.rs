//! Application startup and lifecycle management.

use crate::config::DocumentConfig;
use crate::handlers;
use crate::render::{DocumentBackend, PdfBackend};
use crate::services::DocumentRenderer;
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
    pub config: DocumentConfig,
    pub renderer: Arc<DocumentRenderer>,
    pub backend: Arc<dyn DocumentBackend>,
}

impl AppState {
    pub fn new(config: DocumentConfig) -> Self {
        let renderer = DocumentRenderer::new(config.company.clone());
        Self {
            config,
            renderer: Arc::new(renderer),
            backend: Arc::new(PdfBackend::new()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(metrics_handler))
        .route("/invoices/pdf", post(handlers::invoices::invoice_pdf))
        .route("/invoices/preview", post(handlers::invoices::invoice_preview))
        .route("/invoices/layout", post(handlers::invoices::invoice_layout))
        .route(
            "/invoices/download",
            post(handlers::invoices::invoice_download),
        )
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
    pub async fn build(config: DocumentConfig) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            e
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            output_dir = %config.output_dir.display(),
            company = %config.company.display_name,
            "Document renderer configured"
        );

        Ok(Self {
            port,
            listener,
            router: build_router(AppState::new(config)),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        tracing::info!("document-service listening on port {}", self.port);

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
