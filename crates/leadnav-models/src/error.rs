//! Error types for the `leadnav-models` crate.
//!
//! Validation failures are user-correctable: the server maps them to
//! HTTP 400 before any storage call happens.

/// Errors produced when validating request input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The request body did not contain a cookie field.
    #[error("Cookie value is required")]
    MissingCookie,

    /// The cookie value was empty or whitespace-only.
    #[error("Cookie cannot be empty")]
    EmptyCookie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_missing() {
        assert_eq!(ModelError::MissingCookie.to_string(), "Cookie value is required");
    }

    #[test]
    fn error_display_empty() {
        assert_eq!(ModelError::EmptyCookie.to_string(), "Cookie cannot be empty");
    }
}
