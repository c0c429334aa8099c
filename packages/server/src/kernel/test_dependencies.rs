// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use samsara::models::Driver;
use std::sync::{Arc, Mutex};

use super::{
    BaseCustomerCacheService, BaseDriverCommandService, BaseDriverQueryService, BaseSmsService,
    ServerDeps,
};
use crate::domains::driver::types::{DriverAuthentication, DriverLoginResponse};

// =============================================================================
// Mock Driver Query Service
// =============================================================================

pub struct MockDriverQueryService {
    drivers: Arc<Mutex<Vec<Driver>>>,
    lookup_matches: Arc<Mutex<Vec<Driver>>>,
    fail_with: Arc<Mutex<Option<String>>>,
    lookup_calls: Arc<Mutex<Vec<(String, String)>>>,
    get_drivers_calls: Arc<Mutex<usize>>,
}

impl MockDriverQueryService {
    pub fn new() -> Self {
        Self {
            drivers: Arc::new(Mutex::new(Vec::new())),
            lookup_matches: Arc::new(Mutex::new(Vec::new())),
            fail_with: Arc::new(Mutex::new(None)),
            lookup_calls: Arc::new(Mutex::new(Vec::new())),
            get_drivers_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Roster returned by `get_drivers`
    pub fn with_drivers(self, drivers: Vec<Driver>) -> Self {
        *self.drivers.lock().unwrap() = drivers;
        self
    }

    /// Matches returned by the username+phone lookup
    pub fn with_lookup_matches(self, drivers: Vec<Driver>) -> Self {
        *self.lookup_matches.lock().unwrap() = drivers;
        self
    }

    /// Make every query fail with this message
    pub fn failing_with(self, message: &str) -> Self {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Get all (username, phone) pairs that were looked up
    pub fn lookup_calls(&self) -> Vec<(String, String)> {
        self.lookup_calls.lock().unwrap().clone()
    }

    pub fn get_drivers_calls(&self) -> usize {
        *self.get_drivers_calls.lock().unwrap()
    }
}

impl Default for MockDriverQueryService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseDriverQueryService for MockDriverQueryService {
    async fn get_drivers(&self) -> Result<Vec<Driver>> {
        *self.get_drivers_calls.lock().unwrap() += 1;
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(anyhow::anyhow!(message));
        }
        Ok(self.drivers.lock().unwrap().clone())
    }

    async fn get_driver_by_user_name_and_phone_number(
        &self,
        user_name: &str,
        phone_number: &str,
    ) -> Result<Vec<Driver>> {
        self.lookup_calls
            .lock()
            .unwrap()
            .push((user_name.to_string(), phone_number.to_string()));
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(anyhow::anyhow!(message));
        }
        Ok(self.lookup_matches.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock Driver Command Service
// =============================================================================

pub struct MockDriverCommandService {
    auth_code: Arc<Mutex<String>>,
    fail_with: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<DriverLoginResponse>>>,
}

impl MockDriverCommandService {
    pub fn new() -> Self {
        Self {
            auth_code: Arc::new(Mutex::new("000000".to_string())),
            fail_with: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_auth_code(self, code: &str) -> Self {
        *self.auth_code.lock().unwrap() = code.to_string();
        self
    }

    pub fn failing_with(self, message: &str) -> Self {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Get all login contracts the command was invoked with
    pub fn calls(&self) -> Vec<DriverLoginResponse> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockDriverCommandService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseDriverCommandService for MockDriverCommandService {
    async fn create_authentication(
        &self,
        contract: &DriverLoginResponse,
    ) -> Result<DriverAuthentication> {
        self.calls.lock().unwrap().push(contract.clone());
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(anyhow::anyhow!(message));
        }
        Ok(DriverAuthentication {
            session_id: uuid::Uuid::new_v4(),
            auth_code: self.auth_code.lock().unwrap().clone(),
            expires_at: chrono::Utc::now() + chrono::Duration::minutes(10),
        })
    }
}

// =============================================================================
// Mock SMS Service
// =============================================================================

pub struct MockSmsService {
    fail_with: Arc<Mutex<Option<String>>>,
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self {
            fail_with: Arc::new(Mutex::new(None)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_with(self, message: &str) -> Self {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Get all (message, phone_number) pairs that were sent
    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseSmsService for MockSmsService {
    async fn send_text_message(&self, message: &str, phone_number: &str) -> Result<()> {
        if let Some(error) = self.fail_with.lock().unwrap().clone() {
            return Err(anyhow::anyhow!(error));
        }
        self.sent
            .lock()
            .unwrap()
            .push((message.to_string(), phone_number.to_string()));
        Ok(())
    }
}

// =============================================================================
// Mock Customer Cache Service
// =============================================================================

pub struct MockCustomerCacheService {
    delete_calls: Arc<Mutex<usize>>,
}

impl MockCustomerCacheService {
    pub fn new() -> Self {
        Self {
            delete_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times the cache was cleared
    pub fn delete_calls(&self) -> usize {
        *self.delete_calls.lock().unwrap()
    }
}

impl Default for MockCustomerCacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseCustomerCacheService for MockCustomerCacheService {
    async fn delete(&self) -> Result<()> {
        *self.delete_calls.lock().unwrap() += 1;
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mock collaborators, kept accessible for assertions after the
/// `ServerDeps` has been handed to the service under test.
pub struct TestDependencies {
    pub driver_query: Arc<MockDriverQueryService>,
    pub driver_command: Arc<MockDriverCommandService>,
    pub sms: Arc<MockSmsService>,
    pub customer_cache: Arc<MockCustomerCacheService>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            driver_query: Arc::new(MockDriverQueryService::new()),
            driver_command: Arc::new(MockDriverCommandService::new()),
            sms: Arc::new(MockSmsService::new()),
            customer_cache: Arc::new(MockCustomerCacheService::new()),
        }
    }

    pub fn with_driver_query(mut self, driver_query: MockDriverQueryService) -> Self {
        self.driver_query = Arc::new(driver_query);
        self
    }

    pub fn with_driver_command(mut self, driver_command: MockDriverCommandService) -> Self {
        self.driver_command = Arc::new(driver_command);
        self
    }

    pub fn with_sms(mut self, sms: MockSmsService) -> Self {
        self.sms = Arc::new(sms);
        self
    }

    /// Build a `ServerDeps` sharing these mocks.
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.driver_query.clone(),
            self.driver_command.clone(),
            self.sms.clone(),
            self.customer_cache.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
