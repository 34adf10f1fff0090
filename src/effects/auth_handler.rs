//! Session keeper: the authentication effect handler
//!
//! Keeps a valid session alive for the whole application lifetime.
//! Logs in when no session exists, sleeps until the access token is
//! inside the configured refresh margin, refreshes proactively, and
//! falls back to a full re-login when the refresh token is rejected or
//! exhausted. Errors are retried with an escalating cooldown.

use crate::application::config::Config;
use crate::constants::{ERROR_COOLDOWN_SECONDS, MAX_CONSECUTIVE_ERRORS, MAX_SLEEP_JITTER_SECONDS};
use crate::effects::EffectHandler;
use crate::error::{AppError, AuthError};
use crate::session::auth::PlaceAuth;
use crate::session::interface::Authenticator;
use crate::transport::http_client::HttpTransport;
use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Longest the keeper will sleep in one stretch, so configuration
/// changes and clock drift are picked up within the hour
const MAX_SLEEP_SECONDS: u64 = 3600;

/// The authentication effect handler
pub struct SessionKeeper<T: HttpTransport> {
    config: Arc<Config>,
    auth: Arc<PlaceAuth<T>>,
}

impl<T: HttpTransport> SessionKeeper<T> {
    /// Creates a new session keeper over the shared auth handler
    pub fn new(config: Arc<Config>, auth: Arc<PlaceAuth<T>>) -> Self {
        Self { config, auth }
    }

    /// Sleep with a random jitter so a fleet of clients spreads out
    async fn sleep_with_jitter(seconds: u64) {
        let jitter = rand::rng().random_range(0..=MAX_SLEEP_JITTER_SECONDS);
        tokio::time::sleep(Duration::from_secs(seconds.min(MAX_SLEEP_SECONDS) + jitter)).await;
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> EffectHandler for SessionKeeper<T> {
    fn name(&self) -> &str {
        "authentication"
    }

    async fn run(self: Arc<Self>) -> Result<(), AppError> {
        let margin = self.config.sync.refresh_margin_seconds;
        let mut consecutive_errors = 0u32;

        loop {
            let session = match self.auth.ensure_session().await {
                Ok(session) => {
                    consecutive_errors = 0;
                    session
                }
                Err(AuthError::BadCredentials) => {
                    // Retrying bad credentials only hammers the API;
                    // wait out a full cooldown every time.
                    warn!("Login rejected, cooling down {ERROR_COOLDOWN_SECONDS}s");
                    Self::sleep_with_jitter(ERROR_COOLDOWN_SECONDS).await;
                    continue;
                }
                Err(e) => {
                    consecutive_errors += 1;
                    warn!(
                        "Session keeper error ({consecutive_errors}/{MAX_CONSECUTIVE_ERRORS}): {e}"
                    );
                    let backoff = if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                        consecutive_errors = 0;
                        ERROR_COOLDOWN_SECONDS
                    } else {
                        10 * u64::from(consecutive_errors)
                    };
                    Self::sleep_with_jitter(backoff).await;
                    continue;
                }
            };

            let until_refresh = session.access.seconds_until_expiry(margin);
            debug!("Next token refresh due in {until_refresh}s");
            Self::sleep_with_jitter(until_refresh.max(0) as u64).await;

            // Re-read the slot: a request path may have replaced the
            // session while we slept.
            let Some(current) = self.auth.session().await else {
                continue;
            };

            if current.refresh_exhausted(margin) {
                info!("Refresh token exhausted, performing full re-login");
                self.auth.clear().await;
                continue;
            }

            if !current.needs_refresh(margin) {
                continue;
            }

            match self.auth.refresh(&current).await {
                Ok(_) => {
                    debug!("Proactive token refresh succeeded");
                    consecutive_errors = 0;
                }
                Err(AuthError::RefreshRejected) => {
                    info!("Refresh rejected, falling back to re-login");
                    self.auth.clear().await;
                }
                Err(e) => {
                    consecutive_errors += 1;
                    warn!(
                        "Token refresh failed ({consecutive_errors}/{MAX_CONSECUTIVE_ERRORS}): {e}"
                    );
                    if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                        consecutive_errors = 0;
                        Self::sleep_with_jitter(ERROR_COOLDOWN_SECONDS).await;
                    }
                }
            }
        }
    }
}
