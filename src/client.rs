// src/client.rs

use crate::config::{normalize_base_url, ClientConfig};
use crate::error::GeocodeError;
use crate::models::ApiInfo;
use crate::requests::ApiResponse;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

/// The client for a quick-geocode API server.
///
/// `GeocodeClient` holds the server's base URL and a `reqwest::Client` whose
/// default headers identify the caller and ask for JSON. Both are fixed at
/// construction; every operation is a single GET that borrows the client
/// immutably, so one instance can be reused (or cloned) freely.
///
/// ```rust,no_run
/// use quick_geocode::GeocodeClient;
/// # use quick_geocode::GeocodeError;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), GeocodeError> {
/// let client = GeocodeClient::new("http://localhost:3000")?;
///
/// if let Some(place) = client.geocode("Sydney, Australia").await? {
///     println!("{} -> {},{}", place.label, place.lat, place.lon);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) http_client: Client,
}

/// Builder for [`GeocodeClient`] when the defaults need adjusting.
#[derive(Debug, Clone, Default)]
pub struct GeocodeClientBuilder {
    config: ClientConfig,
}

impl GeocodeClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Sets the identification header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<GeocodeClient, GeocodeError> {
        GeocodeClient::from_config(self.config)
    }
}

impl GeocodeClient {
    /// Creates a client for `server_url` with the default identification header.
    ///
    /// The URL gets an `http://` scheme if it has none, and trailing slashes are
    /// removed. Fails if the URL cannot be used as a base.
    pub fn new(server_url: &str) -> Result<Self, GeocodeError> {
        Self::from_config(ClientConfig::new(server_url))
    }

    pub fn builder() -> GeocodeClientBuilder {
        GeocodeClientBuilder::default()
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, GeocodeError> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(GeocodeError::InvalidHeaderValue)?,
        );
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(GeocodeError::ReqwestError)?;

        log::debug!("GeocodeClient initialized with base_url: {}", base_url);

        Ok(Self {
            base_url,
            user_agent: config.user_agent,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Checks whether the server is up.
    ///
    /// Returns `true` only when the request succeeds, the envelope reports
    /// success and it carries a data payload. Never returns an error.
    pub async fn health_check(&self) -> bool {
        let envelope = self.envelope("/health", &[]).await;
        if envelope.is_fault() {
            log::debug!("Health check failed: {:?}", envelope.error);
        }
        envelope.is_healthy()
    }

    /// Fetches the service description from the server root.
    ///
    /// Returns `Ok(None)` when the server answers with `success: false`.
    pub async fn get_api_info(&self) -> Result<Option<ApiInfo>, GeocodeError> {
        let body = self.get_json("/", &[]).await?;
        if body.get("success").and_then(Value::as_bool) == Some(false) {
            return Ok(None);
        }
        serde_json::from_value(body)
            .map(Some)
            .map_err(|e| GeocodeError::MalformedResult(format!("api info: {}", e)))
    }

    /// Issues a GET and normalizes whatever happens into an [`ApiResponse`].
    ///
    /// Transport failures, non-2xx statuses and unparseable bodies all become
    /// a failed envelope; this never returns an error.
    pub async fn envelope(&self, endpoint: &str, params: &[(&str, String)]) -> ApiResponse {
        match self.get_json(endpoint, params).await {
            Ok(body) => ApiResponse::from_body(body),
            Err(fault) => {
                log::debug!("Request to '{}' failed: {}", endpoint, fault);
                ApiResponse::from_fault(fault)
            }
        }
    }

    pub(crate) fn endpoint_url(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Url, GeocodeError> {
        let raw = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| {
            GeocodeError::InvalidUrl(format!(
                "Failed to build URL for endpoint '{}' on '{}': {}",
                endpoint, self.base_url, e
            ))
        })?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    // Single GET returning the decoded JSON body; non-2xx is an error.
    pub(crate) async fn get_json(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, GeocodeError> {
        let url = self.endpoint_url(endpoint, params)?;
        log::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(GeocodeError::ReqwestError)?;

        let status = response.status();
        let body_bytes = response.bytes().await.map_err(GeocodeError::ReqwestError)?;

        if !status.is_success() {
            let body_text = String::from_utf8_lossy(&body_bytes);
            log::warn!(
                "Request to '{}' failed with status {} and body: {}",
                url,
                status,
                body_text
            );
            return Err(GeocodeError::from_status(status.as_u16(), &body_text));
        }

        log::debug!(
            "Request successful. Response body: {}",
            String::from_utf8_lossy(&body_bytes)
        );
        serde_json::from_slice(&body_bytes).map_err(GeocodeError::JsonError)
    }
}
