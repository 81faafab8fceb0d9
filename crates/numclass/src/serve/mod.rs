mod cli;
mod handler;

pub use cli::ServeOptions;

use crate::facts::{FactProvider, NumbersApi};
use crate::prelude::*;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// State shared by every request. The classifier is pure; only the fact
/// provider lives here.
#[derive(Clone)]
pub struct AppState {
    pub facts: Arc<dyn FactProvider>,
}

/// Build the API router with permissive CORS.
///
/// `/classify` is an alias of `/api/classify-number`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/classify-number", get(handler::classify_number))
        .route("/classify", get(handler::classify_number))
        .layer(cors)
        .with_state(state)
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let facts = NumbersApi::from_options(&options.facts)?;
    let state = AppState {
        facts: Arc::new(facts),
    };

    let addr = format!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    log::info!("Server is running on http://{addr}");
    if global.verbose {
        log::info!(
            "Fun facts from {} ({}, {}ms timeout)",
            options.facts.fact_api_url,
            options.facts.fact_category,
            options.facts.fact_timeout_ms
        );
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {e}");
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
                log::error!("Failed to listen for SIGTERM: {e}");
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

    log::info!("Shutdown signal received");
}
