use crate::application::models::{
    Bookmark, BookmarkCreateReply, BookmarkCreateRequest, BookmarkOutcome, Page,
};
use crate::application::services::BookmarkService;
use crate::error::AppError;
use crate::transport::http_client::HttpTransport;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the bookmark service
pub struct BookmarkServiceImpl<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> BookmarkServiceImpl<T> {
    /// Creates a new instance of the bookmark service
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> BookmarkService for BookmarkServiceImpl<T> {
    async fn list_bookmarks(&self) -> Result<Page<Bookmark>, AppError> {
        debug!("Listing bookmarks");

        let result: Page<Bookmark> = self
            .transport
            .request(Method::GET, "bookmarks/", None::<&()>)
            .await?;

        debug!("Bookmarks obtained: {}", result.results.len());
        Ok(result)
    }

    async fn create_bookmark(&self, place_id: u64) -> Result<BookmarkOutcome, AppError> {
        info!("Bookmarking place {}", place_id);

        let body = BookmarkCreateRequest { place_id };
        let reply: BookmarkCreateReply = self
            .transport
            .request(Method::POST, "bookmarks/new/", Some(&body))
            .await?;

        if reply.already_exists.is_some() {
            debug!("Place {} was already bookmarked", place_id);
            return Ok(BookmarkOutcome::AlreadyExists);
        }

        match reply.bookmark {
            Some(bookmark) => Ok(BookmarkOutcome::Created(bookmark)),
            // Neither shape matched; the endpoint contract changed
            None => Err(AppError::Unexpected(StatusCode::OK)),
        }
    }

    async fn delete_bookmark(&self, id: u64) -> Result<(), AppError> {
        info!("Deleting bookmark {}", id);

        let path = format!("bookmarks/{id}/delete/");
        self.transport
            .request_empty(Method::DELETE, &path, None::<&()>)
            .await?;

        Ok(())
    }
}
