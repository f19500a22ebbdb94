//! HTTP client for the hosted form acceptor
//!
//! The acceptor is an opaque third-party endpoint that stores or forwards
//! submitted messages. It takes a form-encoded POST and answers JSON; we
//! only look at the status class.

use super::traits::{AcceptorClientTrait, SubmissionOutcome};
use crate::config::StoreConfig;
use crate::state::ContactSubmission;
use async_trait::async_trait;
use reqwest::header::ACCEPT;

/// Default acceptor endpoint
const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/storefront";

/// Environment variable overriding the acceptor endpoint
const ENDPOINT_ENV: &str = "STOREFRONT_ACCEPTOR_URL";

/// Resolve the acceptor endpoint: environment variable, then config file,
/// then the built-in default
pub fn resolve_endpoint(config: &StoreConfig) -> String {
    std::env::var(ENDPOINT_ENV)
        .ok()
        .or_else(|| config.acceptor_url.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

/// Client for the form acceptor
pub struct AcceptorClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AcceptorClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    #[allow(dead_code)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AcceptorClientTrait for AcceptorClient {
    async fn submit(&self, submission: &ContactSubmission) -> SubmissionOutcome {
        let result = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(&submission.fields)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    SubmissionOutcome::Accepted
                } else {
                    tracing::warn!("acceptor declined submission: {}", status);
                    SubmissionOutcome::Rejected {
                        status: status.as_u16(),
                    }
                }
            }
            Err(e) => {
                tracing::warn!("acceptor unreachable: {e}");
                SubmissionOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_endpoint_prefers_config_over_default() {
        let config = StoreConfig {
            acceptor_url: Some("https://example.com/forms/contact".to_string()),
        };
        // Env override not set in the test environment
        if std::env::var(ENDPOINT_ENV).is_err() {
            assert_eq!(
                resolve_endpoint(&config),
                "https://example.com/forms/contact"
            );
        }
    }

    #[test]
    fn test_resolve_endpoint_falls_back_to_default() {
        let config = StoreConfig::default();
        if std::env::var(ENDPOINT_ENV).is_err() {
            assert_eq!(resolve_endpoint(&config), DEFAULT_ENDPOINT);
        }
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = AcceptorClient::new("https://example.com/f/abc");
        assert_eq!(client.endpoint(), "https://example.com/f/abc");
    }
}
