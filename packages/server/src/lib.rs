// Driver Authentication API - Core
//
// Backend service that authenticates fleet drivers by phone: validate the
// request, resolve the driver against the Samsara fleet data source, create
// an authentication session, and dispatch the verification code over SMS.
//
// The DomainResponse chain in common/ carries expected business failures;
// collaborator seams live in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
