//! High-level client for the Placemark API
//!
//! This module provides a clean, easy-to-use client that handles:
//! - Building the shared HTTP transport from configuration
//! - Automatic session refresh when the access token expires
//! - Wiring and forking the background effect handlers
//!
//! # Example
//! ```ignore
//! use placemark_client::client::Client;
//! use placemark_client::config::Config;
//!
//! let client = Client::new(Config::new())?;
//! let (root, feed) = client.effect_root();
//! let supervisor = root.start();
//!
//! // Request paths keep working independently of the handlers
//! let places = client.places_page(1).await?;
//! ```

use crate::application::config::Config;
use crate::application::models::{Bookmark, BookmarkOutcome, Page, Place, Review, User};
use crate::application::services::{
    BookmarkService, BookmarkServiceImpl, PlaceService, PlaceServiceImpl,
};
use crate::effects::{EffectHandler, EffectRoot, FeedSnapshot, PlaceSync, SessionKeeper};
use crate::error::AppError;
use crate::session::auth::PlaceAuth;
use crate::session::interface::{Authenticator, Session};
use crate::transport::http_client::{HttpTransport, RestClient};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::warn;

/// Client for the Placemark API with automatic session management
///
/// Owns the shared transport every component uses. The transport's
/// defaults (base URL, credential forwarding) are fixed here, before
/// any request or handler can observe them.
pub struct Client {
    config: Arc<Config>,
    transport: Arc<RestClient>,
    auth: Arc<PlaceAuth<RestClient>>,
    places: PlaceServiceImpl<RestClient>,
    bookmarks: BookmarkServiceImpl<RestClient>,
}

impl Client {
    /// Creates a new client from configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client with the shared transport configured
    /// * `Err(AppError)` - If the transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let transport = Arc::new(RestClient::new(&config)?);
        let auth = Arc::new(PlaceAuth::new(config.clone(), transport.clone()));

        Ok(Self {
            places: PlaceServiceImpl::new(config.clone(), transport.clone()),
            bookmarks: BookmarkServiceImpl::new(transport.clone()),
            config,
            transport,
            auth,
        })
    }

    /// The effective base URL of the shared transport
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Whether the shared transport forwards credentials
    #[must_use]
    pub fn forwards_credentials(&self) -> bool {
        self.transport.forwards_credentials()
    }

    /// The shared configuration
    #[must_use]
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// The shared authentication handler
    #[must_use]
    pub fn auth(&self) -> Arc<PlaceAuth<RestClient>> {
        self.auth.clone()
    }

    /// Builds the effect root over the production handler pair
    ///
    /// Returns the configured root plus the receiver for the place
    /// handler's feed snapshots. Call [`EffectRoot::start`] to fork the
    /// handlers; constructing the root alone spawns nothing.
    #[must_use]
    pub fn effect_root(&self) -> (EffectRoot, watch::Receiver<Option<FeedSnapshot>>) {
        let keeper = SessionKeeper::new(self.config.clone(), self.auth.clone());
        let sync = PlaceSync::new(self.config.clone(), self.transport.clone(), self.auth.clone());
        let feed = sync.subscribe();

        let root = EffectRoot::new(vec![
            Arc::new(keeper) as Arc<dyn EffectHandler>,
            Arc::new(sync),
        ]);
        (root, feed)
    }

    /// Logs in eagerly with the configured credentials
    pub async fn login(&self) -> Result<Session, AppError> {
        Ok(self.auth.login().await?)
    }

    /// Logs out and clears the current session
    pub async fn logout(&self) -> Result<(), AppError> {
        Ok(self.auth.logout().await?)
    }

    /// Fetches the authenticated user's profile
    pub async fn current_user(&self) -> Result<User, AppError> {
        Ok(self.auth.current_user().await?)
    }

    /// Lists one page of the place feed
    pub async fn places_page(&self, page: u32) -> Result<Page<Place>, AppError> {
        match self.places.list_places(page).await {
            Err(AppError::TokenExpired) => {
                self.refresh_session().await?;
                self.places.list_places(page).await
            }
            other => other,
        }
    }

    /// Lists one page of places matching a search query
    pub async fn search(&self, query: &str, page: u32) -> Result<Page<Place>, AppError> {
        match self.places.search_places(query, page).await {
            Err(AppError::TokenExpired) => {
                self.refresh_session().await?;
                self.places.search_places(query, page).await
            }
            other => other,
        }
    }

    /// Fetches a single place
    pub async fn place(&self, id: u64) -> Result<Place, AppError> {
        match self.places.get_place(id).await {
            Err(AppError::TokenExpired) => {
                self.refresh_session().await?;
                self.places.get_place(id).await
            }
            other => other,
        }
    }

    /// Lists the reviews on a place
    pub async fn reviews(&self, place_id: u64) -> Result<Page<Review>, AppError> {
        match self.places.list_reviews(place_id).await {
            Err(AppError::TokenExpired) => {
                self.refresh_session().await?;
                self.places.list_reviews(place_id).await
            }
            other => other,
        }
    }

    /// Lists the current user's bookmarks
    pub async fn bookmarks(&self) -> Result<Page<Bookmark>, AppError> {
        match self.bookmarks.list_bookmarks().await {
            Err(AppError::TokenExpired) => {
                self.refresh_session().await?;
                self.bookmarks.list_bookmarks().await
            }
            other => other,
        }
    }

    /// Bookmarks a place
    pub async fn bookmark(&self, place_id: u64) -> Result<BookmarkOutcome, AppError> {
        match self.bookmarks.create_bookmark(place_id).await {
            Err(AppError::TokenExpired) => {
                self.refresh_session().await?;
                self.bookmarks.create_bookmark(place_id).await
            }
            other => other,
        }
    }

    /// Removes a bookmark
    pub async fn unbookmark(&self, id: u64) -> Result<(), AppError> {
        match self.bookmarks.delete_bookmark(id).await {
            Err(AppError::TokenExpired) => {
                self.refresh_session().await?;
                self.bookmarks.delete_bookmark(id).await
            }
            other => other,
        }
    }

    /// Refreshes the session once after a token expiry, falling back to
    /// a full login when there is no session or the refresh is rejected
    async fn refresh_session(&self) -> Result<(), AppError> {
        warn!("Access token expired, refreshing and retrying");

        match self.auth.session().await {
            Some(session) => {
                if self.auth.refresh(&session).await.is_err() {
                    self.auth.clear().await;
                    self.auth.login().await.map_err(AppError::from)?;
                }
            }
            None => {
                self.auth.login().await.map_err(AppError::from)?;
            }
        }
        Ok(())
    }
}
