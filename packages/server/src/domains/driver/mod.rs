//! Driver domain - phone-based driver authentication and listing.
//!
//! Responsibilities:
//! - Validate login requests and resolve the driver against the fleet
//!   data source
//! - Create authentication sessions and dispatch verification codes via SMS
//! - Clear locally cached customer data whenever authentication fails

pub mod mapper;
pub mod messages;
pub mod service;
pub mod types;
pub mod validation;

pub use service::DriverService;
pub use types::{
    DriverAuthentication, DriverAuthenticationRequest, DriverContract, DriverLoginResponse,
};
