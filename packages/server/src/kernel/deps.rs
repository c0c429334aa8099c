//! Server dependencies for the driver domain (using traits for testability)
//!
//! This module provides the central dependency container injected into the
//! driver service. All external services use trait abstractions to enable
//! testing.

use anyhow::Result;
use async_trait::async_trait;
use samsara::models::Driver;
use samsara::SamsaraClient;
use std::sync::Arc;
use twilio::TwilioService;

use super::{BaseCustomerCacheService, BaseDriverCommandService, BaseDriverQueryService, BaseSmsService};

// =============================================================================
// SamsaraClient Adapter (implements BaseDriverQueryService trait)
// =============================================================================

/// Wrapper around SamsaraClient that implements BaseDriverQueryService.
pub struct SamsaraAdapter(pub Arc<SamsaraClient>);

impl SamsaraAdapter {
    pub fn new(client: Arc<SamsaraClient>) -> Self {
        Self(client)
    }
}

/// Digits-only form of a phone number, for comparing across formats
/// ("+1 (555) 014-2291" vs "15550142291").
fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True when the record carries the requested username and a phone number
/// whose digits match `wanted_phone` (already normalized).
///
/// Records without a username or phone never match.
fn matches_user_name_and_phone(driver: &Driver, user_name: &str, wanted_phone: &str) -> bool {
    driver.username.as_deref() == Some(user_name)
        && driver
            .phone
            .as_deref()
            .is_some_and(|phone| normalize_phone(phone) == wanted_phone)
}

#[async_trait]
impl BaseDriverQueryService for SamsaraAdapter {
    async fn get_drivers(&self) -> Result<Vec<Driver>> {
        self.0
            .get_drivers()
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }

    async fn get_driver_by_user_name_and_phone_number(
        &self,
        user_name: &str,
        phone_number: &str,
    ) -> Result<Vec<Driver>> {
        let wanted_phone = normalize_phone(phone_number);
        let drivers = self.get_drivers().await?;

        Ok(drivers
            .into_iter()
            .filter(|driver| matches_user_name_and_phone(driver, user_name, &wanted_phone))
            .collect())
    }
}

// =============================================================================
// TwilioService Adapter (implements BaseSmsService trait)
// =============================================================================

/// Wrapper around TwilioService that implements BaseSmsService.
pub struct TwilioAdapter(pub Arc<TwilioService>);

impl TwilioAdapter {
    pub fn new(service: Arc<TwilioService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseSmsService for TwilioAdapter {
    async fn send_text_message(&self, message: &str, phone_number: &str) -> Result<()> {
        self.0
            .send_message(phone_number, message)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies accessible to the driver domain (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub driver_query: Arc<dyn BaseDriverQueryService>,
    pub driver_command: Arc<dyn BaseDriverCommandService>,
    pub sms: Arc<dyn BaseSmsService>,
    pub customer_cache: Arc<dyn BaseCustomerCacheService>,
}

impl ServerDeps {
    pub fn new(
        driver_query: Arc<dyn BaseDriverQueryService>,
        driver_command: Arc<dyn BaseDriverCommandService>,
        sms: Arc<dyn BaseSmsService>,
        customer_cache: Arc<dyn BaseCustomerCacheService>,
    ) -> Self {
        Self {
            driver_query,
            driver_command,
            sms,
            customer_cache,
        }
    }
}
