//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. It wraps transport failures and API-level
//! rejections into a unified enum.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The HTTP call failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a failure envelope.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// The `message` field of the failure envelope.
        message: String,
    },

    /// The API answered 2xx but the envelope was missing expected fields.
    #[error("malformed response: {0}")]
    MalformedResponse(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = SdkError::Api {
            status: 404,
            message: "No cookie found for this user".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (404): No cookie found for this user"
        );
    }

    #[test]
    fn malformed_response_display() {
        let err = SdkError::MalformedResponse("missing `data`");
        assert_eq!(err.to_string(), "malformed response: missing `data`");
    }
}
