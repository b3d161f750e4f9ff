//! HTTP client for the coverage lookup endpoint.
//!
//! Sends the address as query-string parameters and distinguishes the three
//! outcomes the endpoint can produce: a JSON payload, an explicit
//! `204 No Content`, or a failure.

use std::time::Duration;

use fibercheck_core::{AddressQuery, CoverageResponse};
use reqwest::{Client, StatusCode, Url};

use crate::error::LookupError;

const LOOKUP_PATH: &str = "api/coverage";

/// Successful answer from the lookup endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The service signalled "no content": no provider covers the address.
    NoContent,
    Payload(CoverageResponse),
}

/// Client for the coverage lookup endpoint.
///
/// Use [`CoverageClient::new`] with the service base URL; tests point it at a
/// `wiremock` server.
#[derive(Debug, Clone)]
pub struct CoverageClient {
    client: Client,
    base_url: Url,
}

impl CoverageClient {
    /// Creates a client for the service rooted at `endpoint`.
    ///
    /// `timeout_secs = None` leaves requests without a deadline.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::InvalidEndpoint`] if
    /// `endpoint` is not an absolute URL.
    pub fn new(
        endpoint: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, LookupError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // A trailing slash makes `join` append to the path instead of
        // replacing its last segment.
        let normalised = format!("{}/", endpoint.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| LookupError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Looks up coverage for `query`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::Http`] on network failure before any response.
    /// - [`LookupError::Status`] on a non-2xx status, carrying the body text.
    /// - [`LookupError::Decode`] if a 2xx body is not a coverage payload.
    pub async fn lookup(&self, query: &AddressQuery) -> Result<LookupOutcome, LookupError> {
        let url = self.lookup_url(query)?;
        tracing::debug!(%url, "requesting coverage lookup");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            tracing::debug!("coverage lookup returned no content");
            return Ok(LookupOutcome::NoContent);
        }

        if !status.is_success() {
            // The body is only used for the message; a failed read leaves it empty.
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "coverage lookup failed");
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let payload: CoverageResponse =
            serde_json::from_str(&body).map_err(|source| LookupError::Decode { source })?;
        tracing::debug!(
            results = payload.results.as_ref().map_or(0, Vec::len),
            "coverage lookup succeeded"
        );
        Ok(LookupOutcome::Payload(payload))
    }

    /// Full lookup URL with every address field as a query parameter.
    fn lookup_url(&self, query: &AddressQuery) -> Result<Url, LookupError> {
        let mut url = self
            .base_url
            .join(LOOKUP_PATH)
            .map_err(|e| LookupError::InvalidEndpoint {
                endpoint: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().extend_pairs(query.to_params());
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
