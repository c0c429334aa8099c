// Main entry point for the driver authentication API server

use std::sync::Arc;

use anyhow::{Context, Result};
use samsara::{SamsaraClient, SamsaraOptions};
use server_core::kernel::{
    AuthApiClient, LocalCustomerCache, SamsaraAdapter, ServerDeps, TwilioAdapter,
};
use server_core::server::build_app;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twilio::{TwilioOptions, TwilioService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Driver Authentication API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Fleet data source
    let samsara_client = Arc::new(SamsaraClient::new(SamsaraOptions {
        api_token: config.samsara_api_token.clone(),
        base_url: config.samsara_base_url.clone(),
    }));

    // SMS dispatch
    let twilio_service = Arc::new(TwilioService::new(TwilioOptions {
        account_sid: config.twilio_account_sid.clone(),
        auth_token: config.twilio_auth_token.clone(),
        from_number: config.twilio_from_number.clone(),
    }));

    // Authentication command API
    let auth_api_client = AuthApiClient::new(
        config.driver_auth_api_url.clone(),
        config.driver_auth_api_key.clone(),
    )
    .context("Failed to create auth API client")?;

    let deps = ServerDeps::new(
        Arc::new(SamsaraAdapter::new(samsara_client)),
        Arc::new(auth_api_client),
        Arc::new(TwilioAdapter::new(twilio_service)),
        Arc::new(LocalCustomerCache::new()),
    );

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
