mod config;
mod dispatcher;
mod dto;
mod handler;
mod message;
mod service;

use std::sync::Arc;

use dispatcher::LogDispatcher;
use service::ContactService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt().init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to locate or load config file: {e}");
    });
    tracing::info!("Successfully loaded contact server config");

    // Setup service
    let service = Arc::new(ContactService::new(
        cfg.recipient.clone(),
        Arc::new(LogDispatcher),
    ));

    if let Some(path) = &cfg.resume_path {
        tracing::info!("Serving resume from {}", path.display());
    }

    let router = handler::router(service, cfg.resume_path.as_deref());

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to port {}: {e}", cfg.port);
            panic!("failed to bind to address: {e}");
        });

    match listener.local_addr() {
        Ok(addr) => tracing::info!("Contact server starting, listening on {}", addr),
        Err(e) => tracing::warn!("Contact server starting, local address unknown: {e}"),
    }

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
