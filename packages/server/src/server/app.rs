//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domains::driver::DriverService;
use crate::kernel::ServerDeps;
use crate::server::routes::{authenticate_driver_handler, health_handler, list_drivers_handler};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub driver_service: Arc<DriverService>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AxumAppState {
        driver_service: Arc::new(DriverService::new(deps)),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/drivers", get(list_drivers_handler))
        .route("/api/drivers/authenticate", post(authenticate_driver_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}
