//! Driver service - authentication pipeline and driver listing.
//!
//! `validate_user_identity` is a fixed chain of steps over
//! [`DomainResponse`]: validate input, resolve the active driver against the
//! fleet data source, create an authentication session, dispatch the
//! verification code over SMS. The first failed step stops the chain, and
//! every failure at or after the resolve step clears the locally cached
//! customer data.

use samsara::models::Driver;
use tracing::{error, info, warn};

use super::types::{DriverAuthenticationRequest, DriverContract, DriverLoginResponse};
use super::{mapper, messages, validation};
use crate::common::DomainResponse;
use crate::kernel::ServerDeps;

pub struct DriverService {
    deps: ServerDeps,
}

impl DriverService {
    pub fn new(deps: ServerDeps) -> Self {
        Self { deps }
    }

    /// Authenticate a driver and dispatch a verification code.
    pub async fn validate_user_identity(
        &self,
        request: &DriverAuthenticationRequest,
    ) -> DomainResponse<DriverLoginResponse> {
        self.validate_user_name(request)
            .then(|| self.validate_phone_number(request))
            .then_async(|contract| self.get_active_driver(contract))
            .await
            .then_async(|contract| self.authenticate(contract))
            .await
    }

    /// List all drivers known to the fleet data source.
    pub async fn get_drivers(&self) -> DomainResponse<Vec<DriverContract>> {
        let response: DomainResponse<Vec<Driver>> =
            self.deps.driver_query.get_drivers().await.into();

        response.then_map(
            |drivers| DomainResponse::Success(mapper::to_contracts(drivers)),
            |original| {
                // Detail stays in the log; callers get the fixed code.
                error!("Driver query failed: {}", original);
                DomainResponse::failure(messages::DRIVER_QUERY_ERROR)
            },
        )
    }

    fn validate_user_name(
        &self,
        request: &DriverAuthenticationRequest,
    ) -> DomainResponse<DriverLoginResponse> {
        validation::validate_required(&request.user_name, messages::USERNAME_REQUIRED, || {
            mapper::to_login_context(request)
        })
    }

    fn validate_phone_number(
        &self,
        request: &DriverAuthenticationRequest,
    ) -> DomainResponse<DriverLoginResponse> {
        validation::validate_required(&request.phone_number, messages::PHONE_NUMBER_REQUIRED, || {
            mapper::to_login_context(request)
        })
    }

    /// Resolve exactly one active driver for the login context.
    async fn get_active_driver(
        &self,
        contract: DriverLoginResponse,
    ) -> DomainResponse<DriverLoginResponse> {
        let lookup = self
            .deps
            .driver_query
            .get_driver_by_user_name_and_phone_number(
                &contract.driver_user_name,
                &contract.phone_number,
            )
            .await;

        let drivers = match lookup {
            Ok(drivers) => drivers,
            Err(query_error) => {
                return self
                    .remove_customer_data_and_fail(format!("{:#}", query_error))
                    .await
            }
        };

        if drivers.is_empty() {
            return self
                .remove_customer_data_and_fail(messages::DRIVER_NOT_FOUND)
                .await;
        }

        // Uniqueness is not enforced upstream; duplicates are a real
        // data-integrity case.
        if drivers.len() != 1 {
            return self
                .remove_customer_data_and_fail(messages::MULTIPLE_DRIVERS_MATCHED)
                .await;
        }

        let driver = &drivers[0];
        if driver.is_inactive() {
            return self
                .remove_customer_data_and_fail(messages::DRIVER_NOT_ACTIVE)
                .await;
        }

        DomainResponse::Success(mapper::to_login_contract(driver))
    }

    /// Create the authentication session and dispatch the code over SMS.
    async fn authenticate(
        &self,
        contract: DriverLoginResponse,
    ) -> DomainResponse<DriverLoginResponse> {
        let authentication = match self.deps.driver_command.create_authentication(&contract).await
        {
            Ok(authentication) => authentication,
            Err(command_error) => {
                return self
                    .remove_customer_data_and_fail(format!("{:#}", command_error))
                    .await
            }
        };

        let message = messages::verification_code_message(&authentication.auth_code);
        if let Err(sms_error) = self
            .deps
            .sms
            .send_text_message(&message, &contract.phone_number)
            .await
        {
            // Delivery is best-effort; the driver can request another code.
            warn!("Failed to send verification SMS: {:#}", sms_error);
        }

        info!(
            "Driver {} authenticated, verification code dispatched",
            contract.driver_id
        );
        DomainResponse::Success(contract)
    }

    /// Clear cached customer data, then fail with `error`.
    ///
    /// Stale customer data must not outlive a failed authentication.
    async fn remove_customer_data_and_fail(
        &self,
        error: impl Into<String>,
    ) -> DomainResponse<DriverLoginResponse> {
        if let Err(cache_error) = self.deps.customer_cache.delete().await {
            warn!("Failed to clear cached customer data: {:#}", cache_error);
        }
        DomainResponse::failure(error)
    }
}

#[cfg(test)]
mod tests {
    use samsara::models::DriverStatus;

    use super::*;
    use crate::kernel::{MockDriverQueryService, TestDependencies};

    fn active_driver() -> Driver {
        Driver {
            id: "12094".to_string(),
            name: "Maria Garcia".to_string(),
            username: Some("mgarcia".to_string()),
            phone: Some("+15550142291".to_string()),
            driver_activation_status: DriverStatus::Active,
        }
    }

    fn request() -> DriverAuthenticationRequest {
        DriverAuthenticationRequest {
            user_name: "mgarcia".to_string(),
            phone_number: "+15550142291".to_string(),
        }
    }

    #[tokio::test]
    async fn blank_username_fails_before_any_remote_call() {
        let deps = TestDependencies::new();
        let service = DriverService::new(deps.server_deps());

        let response = service
            .validate_user_identity(&DriverAuthenticationRequest {
                user_name: "   ".to_string(),
                phone_number: "+15550142291".to_string(),
            })
            .await;

        assert_eq!(response.error_message(), Some(messages::USERNAME_REQUIRED));
        assert!(deps.driver_query.lookup_calls().is_empty());
        assert_eq!(deps.customer_cache.delete_calls(), 0);
    }

    #[tokio::test]
    async fn blank_phone_number_fails_before_any_remote_call() {
        let deps = TestDependencies::new();
        let service = DriverService::new(deps.server_deps());

        let response = service
            .validate_user_identity(&DriverAuthenticationRequest {
                user_name: "mgarcia".to_string(),
                phone_number: "".to_string(),
            })
            .await;

        assert_eq!(
            response.error_message(),
            Some(messages::PHONE_NUMBER_REQUIRED)
        );
        assert!(deps.driver_query.lookup_calls().is_empty());
    }

    #[tokio::test]
    async fn resolved_driver_identity_comes_from_the_record() {
        let deps = TestDependencies::new().with_driver_query(
            MockDriverQueryService::new().with_lookup_matches(vec![active_driver()]),
        );
        let service = DriverService::new(deps.server_deps());

        let response = service.validate_user_identity(&request()).await;

        match response {
            DomainResponse::Success(contract) => {
                assert_eq!(contract.driver_id, "12094");
                assert_eq!(contract.driver_name, "Maria Garcia");
            }
            DomainResponse::Failure(message) => panic!("expected success, got: {}", message),
        }
    }

    #[tokio::test]
    async fn query_error_is_propagated_and_clears_cache() {
        let deps = TestDependencies::new()
            .with_driver_query(MockDriverQueryService::new().failing_with("samsara timed out"));
        let service = DriverService::new(deps.server_deps());

        let response = service.validate_user_identity(&request()).await;

        assert_eq!(response.error_message(), Some("samsara timed out"));
        assert_eq!(deps.customer_cache.delete_calls(), 1);
        assert!(deps.driver_command.calls().is_empty());
    }

    #[tokio::test]
    async fn listing_maps_records_to_contracts() {
        let deps = TestDependencies::new()
            .with_driver_query(MockDriverQueryService::new().with_drivers(vec![active_driver()]));
        let service = DriverService::new(deps.server_deps());

        let response = service.get_drivers().await;

        match response {
            DomainResponse::Success(contracts) => {
                assert_eq!(contracts.len(), 1);
                assert_eq!(contracts[0].id, "12094");
                assert!(contracts[0].active);
            }
            DomainResponse::Failure(message) => panic!("expected success, got: {}", message),
        }
    }

    #[tokio::test]
    async fn listing_substitutes_fixed_error_on_query_failure() {
        let deps = TestDependencies::new()
            .with_driver_query(MockDriverQueryService::new().failing_with("503 from samsara"));
        let service = DriverService::new(deps.server_deps());

        let response = service.get_drivers().await;

        assert_eq!(
            response.error_message(),
            Some(messages::DRIVER_QUERY_ERROR)
        );
    }
}
