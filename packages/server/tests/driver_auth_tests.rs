// End-to-end tests for the driver authentication pipeline and the HTTP
// surface, using the mock collaborators from kernel::test_dependencies.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use samsara::models::{Driver, DriverStatus};
use server_core::common::DomainResponse;
use server_core::domains::driver::{messages, DriverAuthenticationRequest, DriverService};
use server_core::kernel::{
    MockDriverCommandService, MockDriverQueryService, MockSmsService, TestDependencies,
};
use server_core::server::build_app;
use tower::ServiceExt;

fn driver(id: &str, status: DriverStatus) -> Driver {
    Driver {
        id: id.to_string(),
        name: "Maria Garcia".to_string(),
        username: Some("mgarcia".to_string()),
        phone: Some("+15550142291".to_string()),
        driver_activation_status: status,
    }
}

fn login_request() -> DriverAuthenticationRequest {
    DriverAuthenticationRequest {
        user_name: "mgarcia".to_string(),
        phone_number: "+15550142291".to_string(),
    }
}

#[tokio::test]
async fn happy_path_returns_login_context_and_sends_one_sms() {
    let deps = TestDependencies::new()
        .with_driver_query(
            MockDriverQueryService::new()
                .with_lookup_matches(vec![driver("12094", DriverStatus::Active)]),
        )
        .with_driver_command(MockDriverCommandService::new().with_auth_code("481935"));
    let service = DriverService::new(deps.server_deps());

    let response = service.validate_user_identity(&login_request()).await;

    let contract = match response {
        DomainResponse::Success(contract) => contract,
        DomainResponse::Failure(message) => panic!("expected success, got: {}", message),
    };
    assert_eq!(contract.driver_id, "12094");
    assert_eq!(contract.driver_user_name, "mgarcia");

    let sent = deps.sms.sent_messages();
    assert_eq!(sent.len(), 1, "exactly one SMS send must occur");
    assert!(sent[0].0.contains("481935"), "SMS must carry the code");
    assert_eq!(sent[0].1, "+15550142291");

    assert_eq!(deps.driver_command.calls().len(), 1);
    assert_eq!(deps.customer_cache.delete_calls(), 0);
}

#[tokio::test]
async fn no_matching_driver_fails_and_clears_cache_once() {
    let deps = TestDependencies::new();
    let service = DriverService::new(deps.server_deps());

    let response = service.validate_user_identity(&login_request()).await;

    assert_eq!(response.error_message(), Some(messages::DRIVER_NOT_FOUND));
    assert_eq!(deps.customer_cache.delete_calls(), 1);
    assert!(deps.driver_command.calls().is_empty());
    assert!(deps.sms.sent_messages().is_empty());
}

#[tokio::test]
async fn inactive_driver_fails_without_authentication_or_sms() {
    let deps = TestDependencies::new().with_driver_query(
        MockDriverQueryService::new()
            .with_lookup_matches(vec![driver("12094", DriverStatus::Deactivated)]),
    );
    let service = DriverService::new(deps.server_deps());

    let response = service.validate_user_identity(&login_request()).await;

    assert_eq!(response.error_message(), Some(messages::DRIVER_NOT_ACTIVE));
    assert_eq!(deps.customer_cache.delete_calls(), 1);
    assert!(deps.driver_command.calls().is_empty());
    assert!(deps.sms.sent_messages().is_empty());
}

#[tokio::test]
async fn duplicate_matches_fail_with_ambiguity_and_clear_cache() {
    let deps = TestDependencies::new().with_driver_query(
        MockDriverQueryService::new().with_lookup_matches(vec![
            driver("12094", DriverStatus::Active),
            driver("12101", DriverStatus::Active),
        ]),
    );
    let service = DriverService::new(deps.server_deps());

    let response = service.validate_user_identity(&login_request()).await;

    assert_eq!(
        response.error_message(),
        Some(messages::MULTIPLE_DRIVERS_MATCHED)
    );
    assert_eq!(deps.customer_cache.delete_calls(), 1);
}

#[tokio::test]
async fn command_failure_propagates_error_and_clears_cache() {
    let deps = TestDependencies::new()
        .with_driver_query(
            MockDriverQueryService::new()
                .with_lookup_matches(vec![driver("12094", DriverStatus::Active)]),
        )
        .with_driver_command(MockDriverCommandService::new().failing_with("auth api unavailable"));
    let service = DriverService::new(deps.server_deps());

    let response = service.validate_user_identity(&login_request()).await;

    assert_eq!(response.error_message(), Some("auth api unavailable"));
    assert_eq!(deps.customer_cache.delete_calls(), 1);
    assert!(deps.sms.sent_messages().is_empty());
}

#[tokio::test]
async fn sms_delivery_failure_does_not_fail_the_pipeline() {
    let deps = TestDependencies::new()
        .with_driver_query(
            MockDriverQueryService::new()
                .with_lookup_matches(vec![driver("12094", DriverStatus::Active)]),
        )
        .with_sms(MockSmsService::new().failing_with("carrier rejected"));
    let service = DriverService::new(deps.server_deps());

    let response = service.validate_user_identity(&login_request()).await;

    assert!(response.is_success(), "SMS dispatch is best-effort");
    assert_eq!(deps.customer_cache.delete_calls(), 0);
}

#[tokio::test]
async fn blank_username_never_reaches_the_data_source() {
    let deps = TestDependencies::new();
    let service = DriverService::new(deps.server_deps());

    let response = service
        .validate_user_identity(&DriverAuthenticationRequest {
            user_name: "".to_string(),
            phone_number: "+15550142291".to_string(),
        })
        .await;

    assert_eq!(response.error_message(), Some(messages::USERNAME_REQUIRED));
    assert!(deps.driver_query.lookup_calls().is_empty());
    assert_eq!(deps.customer_cache.delete_calls(), 0);
}

// =============================================================================
// Route-level tests
// =============================================================================

#[tokio::test]
async fn authenticate_route_returns_401_with_error_body_on_failure() {
    let deps = TestDependencies::new();
    let app = build_app(deps.server_deps());

    let request = Request::builder()
        .method("POST")
        .uri("/api/drivers/authenticate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"userName": "mgarcia", "phoneNumber": "+15550142291"}"#,
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], messages::DRIVER_NOT_FOUND);
}

#[tokio::test]
async fn authenticate_route_returns_login_context_on_success() {
    let deps = TestDependencies::new().with_driver_query(
        MockDriverQueryService::new()
            .with_lookup_matches(vec![driver("12094", DriverStatus::Active)]),
    );
    let app = build_app(deps.server_deps());

    let request = Request::builder()
        .method("POST")
        .uri("/api/drivers/authenticate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"userName": "mgarcia", "phoneNumber": "+15550142291"}"#,
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["driverId"], "12094");
    assert_eq!(body["driverUserName"], "mgarcia");
}

#[tokio::test]
async fn list_drivers_route_returns_contracts() {
    let deps = TestDependencies::new().with_driver_query(
        MockDriverQueryService::new().with_drivers(vec![driver("12094", DriverStatus::Active)]),
    );
    let app = build_app(deps.server_deps());

    let request = Request::builder()
        .uri("/api/drivers")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body[0]["id"], "12094");
    assert_eq!(body[0]["active"], true);
}

#[tokio::test]
async fn list_drivers_route_returns_502_with_fixed_error_on_query_failure() {
    let deps = TestDependencies::new()
        .with_driver_query(MockDriverQueryService::new().failing_with("samsara unavailable"));
    let app = build_app(deps.server_deps());

    let request = Request::builder()
        .uri("/api/drivers")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], messages::DRIVER_QUERY_ERROR);
}
