use crate::application::models::user::User;
use crate::constants::{ACCESS_TOKEN_LIFETIME_SECONDS, REFRESH_TOKEN_LIFETIME_SECONDS};
use crate::error::AuthError;
use chrono::{DateTime, Duration, Utc};

/// A JWT with client-side expiry accounting
///
/// The API grants fixed lifetimes (14 days access, 31 days refresh) and
/// does not echo expiry timestamps, so expiry is tracked from the moment
/// the token was received.
#[derive(Debug, Clone)]
pub struct JwtToken {
    /// The raw token value
    pub token: String,
    /// When this token was received
    pub created_at: DateTime<Utc>,
    /// Lifetime granted by the API, in seconds
    pub lifetime_seconds: i64,
}

impl JwtToken {
    /// Wraps a freshly received access token
    #[must_use]
    pub fn access(token: String) -> Self {
        Self {
            token,
            created_at: Utc::now(),
            lifetime_seconds: ACCESS_TOKEN_LIFETIME_SECONDS,
        }
    }

    /// Wraps a freshly received refresh token
    #[must_use]
    pub fn refresh(token: String) -> Self {
        Self {
            token,
            created_at: Utc::now(),
            lifetime_seconds: REFRESH_TOKEN_LIFETIME_SECONDS,
        }
    }

    /// Checks if the token is expired or will expire within the margin
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds before actual expiry
    #[must_use]
    pub fn is_expired(&self, margin_seconds: i64) -> bool {
        let expiry = self.created_at + Duration::seconds(self.lifetime_seconds);
        expiry - Duration::seconds(margin_seconds) <= Utc::now()
    }

    /// Seconds remaining until the margin-adjusted expiry, clamped at zero
    #[must_use]
    pub fn seconds_until_expiry(&self, margin_seconds: i64) -> i64 {
        let expiry = self.created_at + Duration::seconds(self.lifetime_seconds - margin_seconds);
        (expiry - Utc::now()).num_seconds().max(0)
    }
}

/// An authenticated session with the Placemark API
///
/// The auth cookies live in the shared transport's cookie store; this
/// struct carries the token copies returned in the login body so the
/// session keeper can schedule proactive refreshes.
#[derive(Debug, Clone)]
pub struct Session {
    /// Access token with expiry accounting
    pub access: JwtToken,
    /// Refresh token with expiry accounting
    pub refresh: JwtToken,
    /// The logged-in user
    pub user: User,
}

impl Session {
    /// Checks if the access token needs a proactive refresh
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds before actual expiry
    #[must_use]
    pub fn needs_refresh(&self, margin_seconds: i64) -> bool {
        self.access.is_expired(margin_seconds)
    }

    /// Checks if the refresh token itself is no longer usable, which
    /// forces a full re-login
    #[must_use]
    pub fn refresh_exhausted(&self, margin_seconds: i64) -> bool {
        self.refresh.is_expired(margin_seconds)
    }
}

/// Trait for authenticating with the Placemark API
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Logs in with the configured credentials and returns a new session
    ///
    /// # Returns
    /// * `Ok(Session)` - A new session; the auth cookies are now in the
    ///   shared cookie store
    /// * `Err(AuthError)` - If authentication fails
    async fn login(&self) -> Result<Session, AuthError>;

    /// Exchanges the session's refresh token for a fresh access token
    async fn refresh(&self, session: &Session) -> Result<Session, AuthError>;

    /// Logs out and invalidates the session server-side
    async fn logout(&self) -> Result<(), AuthError>;

    /// Fetches the authenticated user's profile
    async fn current_user(&self) -> Result<User, AuthError>;
}
