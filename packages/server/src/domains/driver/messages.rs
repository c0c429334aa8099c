//! Fixed catalog of user-facing error codes and SMS templates.

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PHONE_NUMBER_REQUIRED: &str = "Phone number is required";

pub const DRIVER_NOT_FOUND: &str = "No driver matches that username and phone number";
pub const MULTIPLE_DRIVERS_MATCHED: &str =
    "More than one driver matches that username and phone number";
pub const DRIVER_NOT_ACTIVE: &str = "This driver account is no longer active";

/// Substitute returned by the listing when the underlying query fails.
pub const DRIVER_QUERY_ERROR: &str = "Unable to retrieve drivers";

/// SMS body carrying the verification code.
pub fn verification_code_message(auth_code: &str) -> String {
    format!(
        "Your driver verification code is {}. It expires in 10 minutes.",
        auth_code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_message_embeds_the_code() {
        let message = verification_code_message("481935");
        assert!(message.contains("481935"));
    }
}
