//! Client-facing errors raised by the generators before any output is produced.

use thiserror::Error;

/// Rejection of a generation request. Every variant is a caller mistake; retrying
/// the same request gives the same answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A required text field was empty or whitespace-only.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The platform is not in the accepted set.
    #[error("Unsupported platform. Use instagram, linkedin, twitter/x, email, tiktok")]
    UnsupportedPlatform(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_detail() {
        assert_eq!(
            GenerateError::MissingField("customer_message").to_string(),
            "customer_message is required"
        );
        assert_eq!(
            GenerateError::UnsupportedPlatform("facebook".into()).to_string(),
            "Unsupported platform. Use instagram, linkedin, twitter/x, email, tiktok"
        );
    }
}
