//! Error categorization.
//!
//! This module maps `reqwest` failures onto the client error taxonomy.

use super::types::ClientError;

/// Categorizes a `reqwest::Error` raised while sending a request.
///
/// Builder errors (unparsable URL, invalid header name or value) mean the
/// request never left the process; everything else is a transport failure
/// (connect, timeout, protocol).
pub fn categorize_reqwest_error(error: reqwest::Error) -> ClientError {
    if error.is_builder() {
        ClientError::Build(error)
    } else {
        ClientError::Transport(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorCode;

    #[test]
    fn test_builder_error_is_invalid_request() {
        let err = reqwest::Client::new()
            .get("http://example.com/")
            .header("bad header", "x")
            .build()
            .unwrap_err();
        assert!(err.is_builder());
        assert_eq!(
            categorize_reqwest_error(err).error_code(),
            ErrorCode::InvalidRequest
        );
    }

    #[tokio::test]
    async fn test_connect_error_is_failed_request() {
        // Port 1 on localhost is not listening
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            categorize_reqwest_error(err).error_code(),
            ErrorCode::FailedRequest
        );
    }
}
