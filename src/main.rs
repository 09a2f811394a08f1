//! Payment webhook relay server.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use payment_relay::adapters::forwarding::{HttpEventForwarder, HttpForwarderConfig};
use payment_relay::adapters::http::{app_router, WebhookAppState};
use payment_relay::config::AppConfig;
use payment_relay::domain::webhook::StripeWebhookVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;

    init_tracing(&config);

    if !config.forwarding.has_secret() {
        tracing::warn!("Forwarding secret not configured; verified events will not be relayed");
    }

    let verifier = StripeWebhookVerifier::from_config(&config.payment);
    let forwarder =
        HttpEventForwarder::new(HttpForwarderConfig::from_config(&config.forwarding))?;
    let state = WebhookAppState::new(Arc::new(verifier), Arc::new(forwarder));

    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        forward_url = %config.forwarding.forward_url(),
        "Payment relay listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Payment relay stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over config.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Wait for SIGTERM or Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
