//! Spec file validation.
//!
//! For every spec in a file: merge the request headers, send the request,
//! merge the expected response headers and check each one against the
//! response. Header failures are collected; a request that cannot be built
//! or sent stops the rest of the file.

use std::path::Path;

use log::{debug, error, info, warn};

use crate::config::ValidationOptions;
use crate::error_handling::{ErrorCode, InitializationError};
use crate::headers::{evaluate, merge, HeaderCheck};
use crate::http::{HeaderClient, ReqwestClient};
use crate::initialization::init_client;
use crate::spec::{load_spec_file, Headers, Spec, SpecContainer};

/// Outcome of checking one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlStep {
    /// The response was received; every header check, in header-name order.
    Continue(Vec<HeaderCheck>),
    /// The request failed; no further URLs of this file are checked.
    Abort(ErrorCode),
}

impl UrlStep {
    /// Error codes this step contributes, in order.
    pub fn error_codes(&self) -> Vec<ErrorCode> {
        match self {
            UrlStep::Continue(checks) => checks
                .iter()
                .filter_map(HeaderCheck::error_code)
                .collect(),
            UrlStep::Abort(code) => vec![*code],
        }
    }
}

/// Validates spec files against live responses.
pub struct SpecValidator<C> {
    client: C,
    forced_request_headers: Headers,
}

impl SpecValidator<ReqwestClient> {
    /// Creates a validator with a `reqwest` client configured from `options`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(options: &ValidationOptions) -> Result<Self, InitializationError> {
        let client = init_client(options)?;
        Ok(Self::with_client(ReqwestClient::new(client), options))
    }
}

impl<C: HeaderClient> SpecValidator<C> {
    /// Creates a validator that sends requests through `client`.
    pub fn with_client(client: C, options: &ValidationOptions) -> Self {
        Self {
            client,
            forced_request_headers: options.forced_request_headers.clone(),
        }
    }

    /// Validates one spec file and returns its error codes in order.
    ///
    /// An empty result means every header of every URL matched.
    pub async fn validate_file(&self, path: &Path) -> Vec<ErrorCode> {
        info!("Spec file: {}", path.display());
        match load_spec_file(path).await {
            Ok(container) => self.validate_container(&container).await,
            Err(e) => {
                error!("{}", e);
                vec![e.error_code()]
            }
        }
    }

    /// Validates every spec of a loaded container, in order.
    pub async fn validate_container(&self, container: &SpecContainer) -> Vec<ErrorCode> {
        let mut errors = Vec::new();
        let mut checked = 0;

        for (position, spec) in container.specs.iter().enumerate() {
            let step = self.check_url(&container.default, spec).await;
            checked += 1;
            errors.extend(step.error_codes());

            if let UrlStep::Abort(_) = step {
                let skipped = container.specs.len() - position - 1;
                if skipped > 0 {
                    warn!("Skipping {} remaining URL(s) in this file", skipped);
                }
                break;
            }
        }

        if errors.is_empty() {
            info!("{} URL(s) checked, all headers as expected", checked);
        } else {
            error!("{} URL(s) checked, {} failure(s)", checked, errors.len());
        }
        errors
    }

    /// Requests one spec's URL and checks its response headers.
    ///
    /// Request headers are, lowest priority first: forced headers, the
    /// default spec's, then this spec's. Expected response headers are the
    /// default spec's overridden by this spec's.
    pub async fn check_url(&self, default: &Spec, spec: &Spec) -> UrlStep {
        info!("URL: {}", spec.url);

        let request_headers = merge(&[
            &self.forced_request_headers,
            &default.request_headers,
            &spec.request_headers,
        ]);
        let response = match self.client.send(&spec.url, &request_headers).await {
            Ok(response) => response,
            Err(e) => {
                error!("{}: {}", spec.url, e);
                return UrlStep::Abort(e.error_code());
            }
        };
        debug!("{} responded with {}", spec.url, response.status());

        let expected = merge(&[&default.response_headers, &spec.response_headers]);
        let mut checks = Vec::new();
        for (name, values) in &expected {
            let actual = response.values(name);
            for check in evaluate(name, values, &actual) {
                if check.is_success() {
                    info!("  {}", check);
                } else {
                    let code = check.error_code().map_or("", |c| c.as_str());
                    error!("  {}: {}", code, check);
                }
                checks.push(check);
            }
        }
        UrlStep::Continue(checks)
    }
}
