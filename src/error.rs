//! Error types for the Placemark client
//!
//! `AuthError` covers the session lifecycle (login, refresh, logout);
//! `AppError` is the crate-wide error every service and handler returns.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the authentication flow
#[derive(Debug, Error)]
pub enum AuthError {
    /// The API rejected the configured username/password
    #[error("bad credentials")]
    BadCredentials,
    /// The refresh token was rejected; a full re-login is required
    #[error("refresh token rejected")]
    RefreshRejected,
    /// No session is available for an operation that requires one
    #[error("not logged in")]
    NotLoggedIn,
    /// Network-level failure while talking to the auth endpoints
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The API answered with an unexpected status code
    #[error("unexpected auth status: {0}")]
    Unexpected(StatusCode),
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication flow failure
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),
    /// The access token has expired; callers may refresh and retry once
    #[error("access token expired")]
    TokenExpired,
    /// The API rejected the request as unauthenticated
    #[error("unauthorized")]
    Unauthorized,
    /// The API rejected the request as forbidden for this user
    #[error("forbidden")]
    Forbidden,
    /// The requested resource does not exist
    #[error("not found")]
    NotFound,
    /// Network-level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body could not be decoded into the expected shape
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The API answered with an unexpected status code
    #[error("unexpected status: {0}")]
    Unexpected(StatusCode),
}

impl AppError {
    /// Whether retrying after a session refresh could succeed
    #[must_use]
    pub fn is_retryable_after_refresh(&self) -> bool {
        matches!(self, AppError::TokenExpired)
    }
}
