//! Blank-input validation gates for pipeline entry points.

use crate::common::DomainResponse;

/// Fail with `error_message` when `value` is empty or whitespace, otherwise
/// succeed with the lazily-built value.
pub fn validate_required<T>(
    value: &str,
    error_message: &str,
    on_valid: impl FnOnce() -> T,
) -> DomainResponse<T> {
    if value.trim().is_empty() {
        DomainResponse::failure(error_message)
    } else {
        DomainResponse::Success(on_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_fails_with_supplied_message() {
        let response = validate_required("  ", "Username is required", || 1);
        assert_eq!(response.error_message(), Some("Username is required"));
    }

    #[test]
    fn non_blank_input_succeeds() {
        let response = validate_required("mgarcia", "Username is required", || 1);
        assert_eq!(response, DomainResponse::Success(1));
    }
}
