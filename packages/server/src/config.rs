use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub samsara_api_token: String,
    pub samsara_base_url: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,
    pub driver_auth_api_url: String,
    pub driver_auth_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            samsara_api_token: env::var("SAMSARA_API_TOKEN")
                .context("SAMSARA_API_TOKEN must be set")?,
            samsara_base_url: env::var("SAMSARA_BASE_URL")
                .unwrap_or_else(|_| samsara::DEFAULT_BASE_URL.to_string()),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID")
                .context("TWILIO_ACCOUNT_SID must be set")?,
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN")
                .context("TWILIO_AUTH_TOKEN must be set")?,
            twilio_from_number: env::var("TWILIO_FROM_NUMBER")
                .context("TWILIO_FROM_NUMBER must be set")?,
            driver_auth_api_url: env::var("DRIVER_AUTH_API_URL")
                .context("DRIVER_AUTH_API_URL must be set")?,
            driver_auth_api_key: env::var("DRIVER_AUTH_API_KEY").ok(),
        })
    }
}
