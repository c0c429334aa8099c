//! HTTP client for the internal driver-authentication command API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use super::BaseDriverCommandService;
use crate::domains::driver::types::{DriverAuthentication, DriverLoginResponse};

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("auth api request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("auth api returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client for the internal authentication command endpoint.
pub struct AuthApiClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

/// Create-authentication request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAuthenticationRequest<'a> {
    driver_id: &'a str,
    user_name: &'a str,
    phone_number: &'a str,
}

impl AuthApiClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    async fn post_create_authentication(
        &self,
        contract: &DriverLoginResponse,
    ) -> Result<DriverAuthentication, AuthApiError> {
        let url = format!("{}/driver-authentications", self.base_url);
        let request = CreateAuthenticationRequest {
            driver_id: &contract.driver_id,
            user_name: &contract.driver_user_name,
            phone_number: &contract.phone_number,
        };

        let mut builder = self.client.post(url).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthApiError::Status { status, body });
        }

        Ok(response.json::<DriverAuthentication>().await?)
    }
}

#[async_trait]
impl BaseDriverCommandService for AuthApiClient {
    async fn create_authentication(
        &self,
        contract: &DriverLoginResponse,
    ) -> Result<DriverAuthentication> {
        let authentication = self.post_create_authentication(contract).await?;
        Ok(authentication)
    }
}
