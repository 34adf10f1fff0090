//! Shared HTTP transport for the Placemark API
//!
//! One `RestClient` is built at startup from [`Config`] and shared by
//! every component that talks to the API. It owns the process-wide
//! request defaults: base URL, timeout, user agent, rate limiting and -
//! when credential forwarding is enabled - a cookie store that captures
//! the JWT auth cookies on login and replays them on every later
//! request (the equivalent of a browser client sending requests with
//! credentials included).

use crate::application::config::Config;
use crate::application::rate_limiter::{RateLimiter, default_limiter};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::utils::id::request_id;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// Transport seam every service is written against
///
/// The production implementation is [`RestClient`]; tests drive the same
/// trait against a mock HTTP server.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Makes a JSON request and deserializes the response body
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path relative to the base URL
    /// * `body` - Optional request body to serialize as JSON
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - If the request fails
    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;

    /// Makes a JSON request and discards the response body
    ///
    /// Used for endpoints that answer 204 or with bodies the caller
    /// does not need (logout, bookmark deletion).
    async fn request_empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), AppError>
    where
        B: Serialize + Sync;

    /// The effective base URL every relative path is joined to
    fn base_url(&self) -> &str;

    /// Whether cookies are stored and forwarded on every request
    fn forwards_credentials(&self) -> bool;
}

/// Production transport over `reqwest`
pub struct RestClient {
    http_client: HttpClient,
    base_url: String,
    with_credentials: bool,
    rate_limiter: RateLimiter,
}

impl RestClient {
    /// Builds the shared transport from configuration
    ///
    /// This is the single point where the process-wide HTTP defaults
    /// are established; it must run before any handler is started.
    ///
    /// # Arguments
    /// * `config` - Configuration with the REST API and rate limiter sections
    ///
    /// # Returns
    /// * `Ok(RestClient)` - Transport ready to share
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout));

        if config.rest_api.with_credentials {
            builder = builder.cookie_store(true);
        }

        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: config.rest_api.base_url.trim_end_matches('/').to_string(),
            with_credentials: config.rest_api.with_credentials,
            rate_limiter: RateLimiter::new(&config.rate_limiter),
        })
    }

    /// Builds a transport with the process-wide default rate limiter
    ///
    /// Intended for tests and one-off tools that have no full `Config`.
    pub fn with_base_url(base_url: &str, with_credentials: bool) -> Result<Self, AppError> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if with_credentials {
            builder = builder.cookie_store(true);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            with_credentials,
            rate_limiter: default_limiter(),
        })
    }

    /// Joins a relative path onto the base URL
    fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Sends the request and maps non-success statuses into errors
    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        self.rate_limiter.wait().await;

        let url = self.url(path);
        let rid = request_id();
        debug!("{} {} [{}]", method, url, rid);

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json; charset=UTF-8")
            .header("X-Request-Id", rid);

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        match status {
            StatusCode::UNAUTHORIZED => {
                let body_text = response.text().await.unwrap_or_default();
                if body_text.contains("token_not_valid") {
                    return Err(AppError::TokenExpired);
                }
                error!("Unauthorized: {}", body_text);
                Err(AppError::Unauthorized)
            }
            StatusCode::FORBIDDEN => Err(AppError::Forbidden),
            StatusCode::NOT_FOUND => Err(AppError::NotFound),
            s if !s.is_success() => {
                let body_text = response.text().await.unwrap_or_default();
                error!("Request failed with status {}: {}", s, body_text);
                Err(AppError::Unexpected(s))
            }
            _ => Ok(response),
        }
    }
}

#[async_trait]
impl HttpTransport for RestClient {
    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        Ok(response.json().await?)
    }

    async fn request_empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), AppError>
    where
        B: Serialize + Sync,
    {
        self.send(method, path, body).await?;
        Ok(())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn forwards_credentials(&self) -> bool {
        self.with_credentials
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("with_credentials", &self.with_credentials)
            .finish()
    }
}
