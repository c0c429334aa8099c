//! Driver domain contracts.
//!
//! Simple, serializable types crossing the service boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Incoming authentication request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverAuthenticationRequest {
    pub user_name: String,
    pub phone_number: String,
}

/// Login context threaded through the authentication pipeline.
///
/// Built from the request during validation; replaced with the resolved
/// driver's details once the Samsara record is matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverLoginResponse {
    pub driver_id: String,
    pub driver_name: String,
    pub driver_user_name: String,
    pub phone_number: String,
}

/// Listing shape for the read operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverContract {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub active: bool,
}

/// Result of the remote create-authentication command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverAuthentication {
    pub session_id: Uuid,
    pub auth_code: String,
    pub expires_at: DateTime<Utc>,
}
