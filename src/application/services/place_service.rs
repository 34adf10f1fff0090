use crate::application::config::Config;
use crate::application::models::{Page, Place, Review};
use crate::application::services::PlaceService;
use crate::error::AppError;
use crate::transport::http_client::HttpTransport;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the place service
pub struct PlaceServiceImpl<T: HttpTransport> {
    config: Arc<Config>,
    transport: Arc<T>,
}

impl<T: HttpTransport> PlaceServiceImpl<T> {
    /// Creates a new instance of the place service
    pub fn new(config: Arc<Config>, transport: Arc<T>) -> Self {
        Self { config, transport }
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> PlaceService for PlaceServiceImpl<T> {
    async fn list_places(&self, page: u32) -> Result<Page<Place>, AppError> {
        debug!("Listing places, page {}", page);

        let path = format!(
            "places/?page={page}&page_size={}",
            self.config.sync.page_size
        );
        let result: Page<Place> = self.transport.request(Method::GET, &path, None::<&()>).await?;

        debug!(
            "Places obtained: {} of {} total",
            result.results.len(),
            result.count
        );
        Ok(result)
    }

    async fn search_places(&self, query: &str, page: u32) -> Result<Page<Place>, AppError> {
        info!("Searching places for '{}'", query);

        let path = format!(
            "places/?search={query}&page={page}&page_size={}",
            self.config.sync.page_size
        );
        let result: Page<Place> = self.transport.request(Method::GET, &path, None::<&()>).await?;

        debug!("Search matched {} places", result.count);
        Ok(result)
    }

    async fn get_place(&self, id: u64) -> Result<Place, AppError> {
        debug!("Fetching place {}", id);

        let path = format!("places/{id}/");
        let result: Place = self.transport.request(Method::GET, &path, None::<&()>).await?;

        Ok(result)
    }

    async fn list_reviews(&self, place_id: u64) -> Result<Page<Review>, AppError> {
        debug!("Listing reviews for place {}", place_id);

        let path = format!("reviews/?place_id={place_id}");
        let result: Page<Review> = self.transport.request(Method::GET, &path, None::<&()>).await?;

        debug!("Reviews obtained: {}", result.results.len());
        Ok(result)
    }
}
