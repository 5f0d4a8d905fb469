use std::sync::Arc;

use billing_webhook::adapters::{app_router, NoopBillingEventHandler, WebhookAppState};
use billing_webhook::config::AppConfig;
use billing_webhook::domain::billing::WebhookSignatureVerifier;
use billing_webhook::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    // Refuse to start without a usable signing secret.
    config.validate()?;

    let addr = config.server.socket_addr()?;

    let state = WebhookAppState::new(
        Arc::new(WebhookSignatureVerifier::new(
            config.webhook.signing_secret.clone(),
        )),
        Arc::new(NoopBillingEventHandler::new()),
    );

    let app = app_router(
        state,
        &config.webhook.path,
        config.server.request_timeout(),
        config.server.max_body_bytes,
    );

    tracing::info!(
        %addr,
        path = %config.webhook.path,
        environment = ?config.server.environment,
        "billing webhook receiver listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
