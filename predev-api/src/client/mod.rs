//! The Pre.dev API client: one outbound HTTP request per operation, one
//! classified result or error back.

pub(crate) mod payload;

use crate::PREDEV_API_BASE_URL;
use crate::error::PredevError;
use crate::types::{
    AsyncSpecHandle, CreditsBalance, ListSpecsQuery, SpecListPage, SpecRequest, SpecResponse,
};
use payload::{SpecPayload, encode_spec_request};

use common::{ErrorLocation, HttpStatusCode, RedactedApiKey};

use std::panic::Location;
use std::time::Duration;

use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Exactly one of these headers carries the credential, never both.
const API_KEY_HEADER: &str = "x-api-key";
const ENTERPRISE_API_KEY_HEADER: &str = "x-enterprise-api-key";

const FAST_SPEC_ENDPOINT: &str = "api/fast-spec";
const DEEP_SPEC_ENDPOINT: &str = "api/deep-spec";
const SPEC_STATUS_ENDPOINT: &str = "api/spec-status";
const LIST_SPECS_ENDPOINT: &str = "api/list-specs";
const FIND_SPECS_ENDPOINT: &str = "api/find-specs";
const CREDITS_ENDPOINT: &str = "api/credits";

/// Client for the Pre.dev Architect API.
///
/// Holds only immutable configuration; cloning is cheap and a single
/// instance can be shared across concurrent tasks. Every call is a single
/// HTTP attempt. Retry, backoff, and caching are deliberately the caller's
/// business.
#[derive(Clone, Debug)]
pub struct PredevClient {
    base_url: Url,
    http: Client,
    api_key: RedactedApiKey,
    auth_header: &'static str,
}

impl PredevClient {
    /// Client against the canonical origin, authenticating with `x-api-key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self, PredevError> {
        Self::build(api_key, PREDEV_API_BASE_URL, API_KEY_HEADER)
    }

    /// Client against a deployment-specific base URL.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, PredevError> {
        Self::build(api_key, base_url, API_KEY_HEADER)
    }

    /// Client using enterprise authentication (`x-enterprise-api-key`).
    pub fn enterprise(api_key: impl Into<String>) -> Result<Self, PredevError> {
        Self::build(api_key, PREDEV_API_BASE_URL, ENTERPRISE_API_KEY_HEADER)
    }

    pub fn enterprise_with_base_url(
        api_key: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, PredevError> {
        Self::build(api_key, base_url, ENTERPRISE_API_KEY_HEADER)
    }

    fn build(
        api_key: impl Into<String>,
        base_url: &str,
        auth_header: &'static str,
    ) -> Result<Self, PredevError> {
        let base_url = Url::parse(base_url)?;
        let http = Client::builder().timeout(DEFAULT_TIMEOUT_DURATION).build()?;

        Ok(Self {
            base_url,
            http,
            api_key: RedactedApiKey::new(api_key.into()),
            auth_header,
        })
    }

    /// Generate a fast spec, blocking until the job finishes.
    ///
    /// Balanced depth and speed; typically 30-40 seconds server-side.
    ///
    /// # Errors
    /// [`PredevError::Authentication`] on 401, [`PredevError::RateLimit`]
    /// on 429, [`PredevError::Api`] for anything else that went wrong.
    pub async fn fast_spec(&self, request: &SpecRequest) -> Result<SpecResponse, PredevError> {
        self.generate(FAST_SPEC_ENDPOINT, request, false).await
    }

    /// Generate a deep spec, blocking until the job finishes.
    ///
    /// Enterprise-grade depth; typically 2-3 minutes server-side. Prefer
    /// [`deep_spec_async`](Self::deep_spec_async) to avoid holding the
    /// connection open that long.
    pub async fn deep_spec(&self, request: &SpecRequest) -> Result<SpecResponse, PredevError> {
        self.generate(DEEP_SPEC_ENDPOINT, request, false).await
    }

    /// Submit a fast spec and return immediately with a pollable handle.
    pub async fn fast_spec_async(
        &self,
        request: &SpecRequest,
    ) -> Result<AsyncSpecHandle, PredevError> {
        self.generate(FAST_SPEC_ENDPOINT, request, true).await
    }

    /// Submit a deep spec and return immediately with a pollable handle.
    pub async fn deep_spec_async(
        &self,
        request: &SpecRequest,
    ) -> Result<AsyncSpecHandle, PredevError> {
        self.generate(DEEP_SPEC_ENDPOINT, request, true).await
    }

    /// Fetch the current state of a generation job.
    ///
    /// No caching: every call re-fetches, and earlier-stage results carry
    /// fewer populated fields.
    pub async fn get_spec_status(&self, spec_id: &str) -> Result<SpecResponse, PredevError> {
        self.get_json(&format!("{SPEC_STATUS_ENDPOINT}/{spec_id}"), &[])
            .await
    }

    /// List previously generated specs, newest first.
    pub async fn list_specs(&self, query: &ListSpecsQuery) -> Result<SpecListPage, PredevError> {
        self.get_json(LIST_SPECS_ENDPOINT, &query.to_query_pairs())
            .await
    }

    /// Search previous specs by pattern.
    ///
    /// The pattern is passed through verbatim as a server-side
    /// case-insensitive regex; no local validation or escaping. Malformed
    /// patterns come back as generic API errors.
    pub async fn find_specs(
        &self,
        pattern: &str,
        filters: &ListSpecsQuery,
    ) -> Result<SpecListPage, PredevError> {
        let mut pairs = vec![("query", pattern.to_string())];
        pairs.extend(filters.to_query_pairs());
        self.get_json(FIND_SPECS_ENDPOINT, &pairs).await
    }

    /// Remaining-credits balance for the authenticated account.
    pub async fn get_credits(&self) -> Result<CreditsBalance, PredevError> {
        self.get_json(CREDITS_ENDPOINT, &[]).await
    }

    async fn generate<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: &SpecRequest,
        async_mode: bool,
    ) -> Result<T, PredevError> {
        let url = self.base_url.join(endpoint)?;
        debug!("POST {url} (async_mode: {async_mode})");

        let builder = self
            .http
            .post(url)
            .header(self.auth_header, self.api_key.as_str());

        let builder = match encode_spec_request(request, async_mode)? {
            SpecPayload::Json(body) => builder.json(&body),
            SpecPayload::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await?;
        let response = classified(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, PredevError> {
        let url = self.base_url.join(endpoint)?;
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .query(query)
            .header(self.auth_header, self.api_key.as_str())
            .send()
            .await?;

        let response = classified(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Turn a non-2xx response into the error taxonomy; pass 2xx through.
async fn classified(response: Response) -> Result<Response, PredevError> {
    let status = HttpStatusCode::from(response.status().as_u16());
    if status.is_success() {
        return Ok(response);
    }

    if status.is_authentication() {
        return Err(PredevError::Authentication {
            message: String::from("Invalid API key"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if status.is_rate_limit() {
        return Err(PredevError::RateLimit {
            message: String::from("Rate limit exceeded"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Fallback chain: server-provided error field, raw body text, then a
    // bare status line. A secondary parse failure must never mask the
    // original error.
    let body = response.text().await.unwrap_or_default();
    let message = extract_error_message(&body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body.clone()
        }
    });

    Err(PredevError::Api {
        status: Some(status),
        message: format!("API request failed with status {status}: {message}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))?
        .as_str()
        .map(String::from)
}
