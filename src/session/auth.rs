//! Authentication against the Placemark API
//!
//! Login and refresh answer with JWT cookies (captured by the shared
//! transport's cookie store) and echo the tokens in the body; the body
//! copies are kept in the [`Session`] so expiry can be tracked without
//! inspecting cookies.

use crate::application::config::Config;
use crate::application::models::user::User;
use crate::error::{AppError, AuthError};
use crate::session::interface::{Authenticator, JwtToken, Session};
use crate::session::response::{DetailResp, LoginRequest, LoginResp, RefreshRequest, RefreshResp};
use crate::transport::http_client::HttpTransport;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Authentication handler for the Placemark API
///
/// Owns the session slot shared between the request paths and the
/// session keeper loop.
pub struct PlaceAuth<T: HttpTransport> {
    config: Arc<Config>,
    transport: Arc<T>,
    session: Arc<RwLock<Option<Session>>>,
}

impl<T: HttpTransport + 'static> PlaceAuth<T> {
    /// Creates a new authentication handler
    ///
    /// # Arguments
    /// * `config` - Configuration with the account credentials
    /// * `transport` - The shared HTTP transport
    pub fn new(config: Arc<Config>, transport: Arc<T>) -> Self {
        Self {
            config,
            transport,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns a clone of the current session, if logged in
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Returns the current session, logging in first if there is none
    pub async fn ensure_session(&self) -> Result<Session, AuthError> {
        if let Some(session) = self.session().await {
            return Ok(session);
        }
        self.login().await
    }

    /// Drops the local session without calling the API
    pub async fn clear(&self) {
        *self.session.write().await = None;
    }

    /// Maps transport errors from the login call
    fn login_error(err: AppError) -> AuthError {
        match err {
            AppError::Unauthorized | AppError::Unexpected(StatusCode::BAD_REQUEST) => {
                AuthError::BadCredentials
            }
            AppError::Network(e) => AuthError::Network(e),
            AppError::Unexpected(status) => AuthError::Unexpected(status),
            other => {
                error!("Unexpected login failure: {other}");
                AuthError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// Maps transport errors from the refresh call
    fn refresh_error(err: AppError) -> AuthError {
        match err {
            AppError::TokenExpired | AppError::Unauthorized => AuthError::RefreshRejected,
            AppError::Unexpected(StatusCode::BAD_REQUEST) => AuthError::RefreshRejected,
            AppError::Network(e) => AuthError::Network(e),
            AppError::Unexpected(status) => AuthError::Unexpected(status),
            other => {
                error!("Unexpected refresh failure: {other}");
                AuthError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> Authenticator for PlaceAuth<T> {
    async fn login(&self) -> Result<Session, AuthError> {
        info!("Logging in as {}", self.config.credentials.username);

        let body = LoginRequest {
            username: self.config.credentials.username.clone(),
            password: self.config.credentials.password.clone(),
        };

        let resp: LoginResp = self
            .transport
            .request(Method::POST, "auth/login/", Some(&body))
            .await
            .map_err(Self::login_error)?;

        debug!("Login succeeded for user {}", resp.user.username);

        let session = Session {
            access: JwtToken::access(resp.access_token),
            refresh: JwtToken::refresh(resp.refresh_token),
            user: resp.user,
        };

        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn refresh(&self, session: &Session) -> Result<Session, AuthError> {
        debug!("Refreshing access token");

        let body = RefreshRequest {
            refresh: session.refresh.token.clone(),
        };

        let resp: RefreshResp = self
            .transport
            .request(Method::POST, "auth/token/refresh/", Some(&body))
            .await
            .map_err(Self::refresh_error)?;

        let new_session = Session {
            access: JwtToken::access(resp.access),
            refresh: session.refresh.clone(),
            user: session.user.clone(),
        };

        *self.session.write().await = Some(new_session.clone());
        debug!("Access token refreshed");
        Ok(new_session)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        info!("Logging out");

        let result: Result<DetailResp, AppError> = self
            .transport
            .request(Method::POST, "auth/logout/", None::<&()>)
            .await;

        // The local session is gone either way; the server-side cookie
        // invalidation failing is not worth keeping stale state for.
        self.clear().await;

        match result {
            Ok(resp) => {
                debug!("Logout response: {}", resp.detail);
                Ok(())
            }
            Err(AppError::Network(e)) => Err(AuthError::Network(e)),
            Err(e) => {
                warn!("Logout failed after clearing local session: {e}");
                Ok(())
            }
        }
    }

    async fn current_user(&self) -> Result<User, AuthError> {
        let user: User = self
            .transport
            .request(Method::GET, "auth/user/", None::<&()>)
            .await
            .map_err(|e| match e {
                AppError::TokenExpired | AppError::Unauthorized => AuthError::NotLoggedIn,
                AppError::Network(err) => AuthError::Network(err),
                AppError::Unexpected(status) => AuthError::Unexpected(status),
                other => {
                    error!("Unexpected user fetch failure: {other}");
                    AuthError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR)
                }
            })?;

        Ok(user)
    }
}
