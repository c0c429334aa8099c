//! Kernel module - server infrastructure and dependencies.

pub mod auth_api_client;
pub mod customer_cache;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use auth_api_client::{AuthApiClient, AuthApiError};
pub use customer_cache::LocalCustomerCache;
pub use deps::{SamsaraAdapter, ServerDeps, TwilioAdapter};
pub use test_dependencies::{
    MockCustomerCacheService, MockDriverCommandService, MockDriverQueryService, MockSmsService,
    TestDependencies,
};
pub use traits::*;
