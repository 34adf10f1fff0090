use crate::application::models::{Bookmark, BookmarkOutcome, Page, Place, Review};
use crate::error::AppError;
use async_trait::async_trait;

/// Module containing the bookmark service implementation
pub mod bookmark_service;
/// Module containing the place service implementation
pub mod place_service;

pub use bookmark_service::BookmarkServiceImpl;
pub use place_service::PlaceServiceImpl;

/// Read access to the place directory
#[async_trait]
pub trait PlaceService: Send + Sync {
    /// Lists one page of the place feed
    async fn list_places(&self, page: u32) -> Result<Page<Place>, AppError>;

    /// Lists one page of places matching a search query
    async fn search_places(&self, query: &str, page: u32) -> Result<Page<Place>, AppError>;

    /// Fetches a single place by id
    async fn get_place(&self, id: u64) -> Result<Place, AppError>;

    /// Lists the reviews left on a place
    async fn list_reviews(&self, place_id: u64) -> Result<Page<Review>, AppError>;
}

/// The current user's bookmarks
#[async_trait]
pub trait BookmarkService: Send + Sync {
    /// Lists the current user's bookmarks
    async fn list_bookmarks(&self) -> Result<Page<Bookmark>, AppError>;

    /// Bookmarks a place; reports when it was already bookmarked
    async fn create_bookmark(&self, place_id: u64) -> Result<BookmarkOutcome, AppError>;

    /// Removes a bookmark by id
    async fn delete_bookmark(&self, id: u64) -> Result<(), AppError>;
}
