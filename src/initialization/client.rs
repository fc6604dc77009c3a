//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::ValidationOptions;

/// Initializes the HTTP client used to request spec URLs.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from options (a spec's own `User-Agent` request header wins)
/// - Timeout from options, if any
/// - No idle connection pool when connection reuse is disabled
///
/// Redirects are followed with reqwest's default policy.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(options: &ValidationOptions) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = ClientBuilder::new().user_agent(options.user_agent.clone());
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    if options.disable_connection_reuse {
        builder = builder.pool_max_idle_per_host(0);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_init_client_default_options() {
        assert!(init_client(&ValidationOptions::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_timeout_and_no_reuse() {
        let options = ValidationOptions {
            timeout: Some(Duration::from_secs(2)),
            disable_connection_reuse: true,
            ..Default::default()
        };
        assert!(init_client(&options).is_ok());
    }
}
