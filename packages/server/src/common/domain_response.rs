//! DomainResponse - chainable success-or-error value for business workflows.
//!
//! Expected business failures (blank input, driver not found, inactive
//! account) travel as `Failure` values instead of panics or error returns,
//! so a multi-step workflow reads as a linear chain that stops at the first
//! failed step.
//!
//! # Example
//!
//! ```rust,ignore
//! let response = validate_user_name(&request)
//!     .then(|| validate_phone_number(&request))
//!     .then_async(|context| resolve_driver(context))
//!     .await;
//! ```

use std::future::Future;

/// Either a success value or a non-blank error message, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainResponse<T> {
    Success(T),
    Failure(String),
}

impl<T> DomainResponse<T> {
    /// Construct a failure.
    ///
    /// A blank message is a programmer error and panics; failures must
    /// always carry a human-readable reason.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(
            !message.trim().is_empty(),
            "failure message cannot be blank"
        );
        DomainResponse::Failure(message)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DomainResponse::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The failure message, if this is a failure.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            DomainResponse::Success(_) => None,
            DomainResponse::Failure(message) => Some(message),
        }
    }

    /// Run a zero-argument validation gate, short-circuiting on failure.
    ///
    /// A failure passes through unchanged and `next_call` is never invoked.
    pub fn then(self, next_call: impl FnOnce() -> DomainResponse<T>) -> DomainResponse<T> {
        match self {
            DomainResponse::Success(_) => next_call(),
            failure => failure,
        }
    }

    /// Run an async step with the success value, short-circuiting on failure.
    ///
    /// The step completes fully before anything after it runs; there is no
    /// fan-out here.
    pub async fn then_async<F, Fut>(self, next_call: F) -> DomainResponse<T>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = DomainResponse<T>>,
    {
        match self {
            DomainResponse::Success(value) => next_call(value).await,
            failure => failure,
        }
    }

    /// Transform the success type, with an explicit failure branch.
    ///
    /// On failure only `error_call` runs; it receives the original message
    /// so callers substituting a fixed error code can still log or keep the
    /// underlying detail.
    pub fn then_map<U, S, E>(self, next_call: S, error_call: E) -> DomainResponse<U>
    where
        S: FnOnce(T) -> DomainResponse<U>,
        E: FnOnce(&str) -> DomainResponse<U>,
    {
        match self {
            DomainResponse::Success(value) => next_call(value),
            DomainResponse::Failure(message) => error_call(&message),
        }
    }
}

impl<T> From<anyhow::Result<T>> for DomainResponse<T> {
    fn from(result: anyhow::Result<T>) -> Self {
        match result {
            Ok(value) => DomainResponse::Success(value),
            // {:#} keeps the context chain in one line
            Err(error) => DomainResponse::failure(format!("{:#}", error)),
        }
    }
}
