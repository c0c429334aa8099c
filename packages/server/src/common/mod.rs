// Common types and utilities shared across the application

pub mod domain_response;

pub use domain_response::DomainResponse;
