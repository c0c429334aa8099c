use axum::{extract::Extension, http::StatusCode, Json};
use serde_json::json;

use crate::common::DomainResponse;
use crate::domains::driver::DriverAuthenticationRequest;
use crate::server::app::AxumAppState;

/// Authenticate a driver and dispatch a verification code.
///
/// Returns the login context on success; pipeline failures surface their
/// error message with a 401.
pub async fn authenticate_driver_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<DriverAuthenticationRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.driver_service.validate_user_identity(&request).await {
        DomainResponse::Success(contract) => (
            StatusCode::OK,
            Json(json!(contract)),
        ),
        DomainResponse::Failure(message) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": message })),
        ),
    }
}

/// List all drivers known to the fleet data source.
pub async fn list_drivers_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.driver_service.get_drivers().await {
        DomainResponse::Success(contracts) => (StatusCode::OK, Json(json!(contracts))),
        DomainResponse::Failure(message) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": message })),
        ),
    }
}
