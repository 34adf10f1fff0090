//! Place sync: the place effect handler
//!
//! Keeps the client's view of the place directory warm. On every tick
//! it fetches the first page of the place feed and, when a session
//! exists, the user's bookmarks, and publishes both into a watch slot
//! the UI layer can read without ever touching the network itself.
//! The feed is public; bookmarks are skipped while unauthenticated.

use crate::application::config::Config;
use crate::application::models::{Bookmark, Place};
use crate::application::services::{
    BookmarkService, BookmarkServiceImpl, PlaceService, PlaceServiceImpl,
};
use crate::constants::{ERROR_COOLDOWN_SECONDS, MAX_CONSECUTIVE_ERRORS, MAX_SLEEP_JITTER_SECONDS};
use crate::effects::EffectHandler;
use crate::error::AppError;
use crate::session::auth::PlaceAuth;
use crate::transport::http_client::HttpTransport;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

/// One refreshed view of the place feed and the user's bookmarks
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    /// First page of the place feed
    pub places: Vec<Place>,
    /// The user's bookmarks; empty while unauthenticated
    pub bookmarks: Vec<Bookmark>,
    /// When this snapshot was taken
    pub refreshed_at: DateTime<Utc>,
}

/// The place effect handler
pub struct PlaceSync<T: HttpTransport> {
    config: Arc<Config>,
    places: PlaceServiceImpl<T>,
    bookmarks: BookmarkServiceImpl<T>,
    auth: Arc<PlaceAuth<T>>,
    tx: watch::Sender<Option<FeedSnapshot>>,
}

impl<T: HttpTransport + 'static> PlaceSync<T> {
    /// Creates a new place sync handler over the shared transport
    pub fn new(config: Arc<Config>, transport: Arc<T>, auth: Arc<PlaceAuth<T>>) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            places: PlaceServiceImpl::new(config.clone(), transport.clone()),
            bookmarks: BookmarkServiceImpl::new(transport),
            config,
            auth,
            tx,
        }
    }

    /// Subscribes to published snapshots
    ///
    /// The slot holds `None` until the first successful refresh.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<FeedSnapshot>> {
        self.tx.subscribe()
    }

    /// Fetches one snapshot and publishes it
    async fn refresh_once(&self) -> Result<(), AppError> {
        let feed = self.places.list_places(1).await?;

        let bookmarks = if self.auth.session().await.is_some() {
            match self.bookmarks.list_bookmarks().await {
                Ok(page) => page.results,
                // A session raced away between the check and the call;
                // publish the feed anyway.
                Err(AppError::Unauthorized | AppError::TokenExpired) => Vec::new(),
                Err(e) => return Err(e),
            }
        } else {
            Vec::new()
        };

        debug!(
            "Feed refreshed: {} places, {} bookmarks",
            feed.results.len(),
            bookmarks.len()
        );

        self.tx.send_replace(Some(FeedSnapshot {
            places: feed.results,
            bookmarks,
            refreshed_at: Utc::now(),
        }));

        Ok(())
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> EffectHandler for PlaceSync<T> {
    fn name(&self) -> &str {
        "place"
    }

    async fn run(self: Arc<Self>) -> Result<(), AppError> {
        let interval = self.config.sync.feed_refresh_seconds;
        let mut consecutive_errors = 0u32;

        loop {
            match self.refresh_once().await {
                Ok(()) => consecutive_errors = 0,
                Err(e) => {
                    consecutive_errors += 1;
                    warn!(
                        "Place sync error ({consecutive_errors}/{MAX_CONSECUTIVE_ERRORS}): {e}"
                    );
                    if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                        consecutive_errors = 0;
                        tokio::time::sleep(Duration::from_secs(ERROR_COOLDOWN_SECONDS)).await;
                        continue;
                    }
                }
            }

            let jitter = rand::rng().random_range(0..=MAX_SLEEP_JITTER_SECONDS);
            tokio::time::sleep(Duration::from_secs(interval + jitter)).await;
        }
    }
}
