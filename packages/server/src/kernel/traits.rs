// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like the authentication pipeline) lives in domain code
// that uses these traits.
//
// Naming convention: Base* for trait names (e.g., BaseSmsService)

use anyhow::Result;
use async_trait::async_trait;
use samsara::models::Driver;

use crate::domains::driver::types::{DriverAuthentication, DriverLoginResponse};

// =============================================================================
// Driver Query Trait (Infrastructure - remote fleet data source)
// =============================================================================

#[async_trait]
pub trait BaseDriverQueryService: Send + Sync {
    /// Fetch the full driver roster from the fleet data source.
    async fn get_drivers(&self) -> Result<Vec<Driver>>;

    /// Fetch the drivers matching both username and phone number.
    ///
    /// Uniqueness is not guaranteed upstream; callers must handle zero or
    /// multiple matches.
    async fn get_driver_by_user_name_and_phone_number(
        &self,
        user_name: &str,
        phone_number: &str,
    ) -> Result<Vec<Driver>>;
}

// =============================================================================
// Driver Command Trait (Infrastructure - remote authentication command)
// =============================================================================

#[async_trait]
pub trait BaseDriverCommandService: Send + Sync {
    /// Create an authentication session for the resolved driver.
    async fn create_authentication(
        &self,
        contract: &DriverLoginResponse,
    ) -> Result<DriverAuthentication>;
}

// =============================================================================
// SMS Trait (Infrastructure - text message dispatch)
// =============================================================================

#[async_trait]
pub trait BaseSmsService: Send + Sync {
    /// Send a text message to a phone number.
    async fn send_text_message(&self, message: &str, phone_number: &str) -> Result<()>;
}

// =============================================================================
// Customer Cache Trait (Infrastructure - local cached customer data)
// =============================================================================

#[async_trait]
pub trait BaseCustomerCacheService: Send + Sync {
    /// Clear all locally cached customer data.
    async fn delete(&self) -> Result<()>;
}
