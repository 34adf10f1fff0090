use crate::application::models::place::Place;
use serde::{Deserialize, Serialize};

/// A bookmark tying the current user to a place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    /// Unique identifier for the bookmark
    pub id: u64,
    /// The bookmarked place
    pub place: Place,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Request body for creating a bookmark
#[derive(Debug, Clone, Serialize)]
pub struct BookmarkCreateRequest {
    /// Identifier of the place to bookmark
    pub place_id: u64,
}

/// Raw reply from the bookmark creation endpoint
///
/// The API answers a duplicate bookmark with `{"alreadyExists": "True"}`
/// instead of an error status, so both shapes are optional here and
/// resolved into [`BookmarkOutcome`] by the service layer.
#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkCreateReply {
    /// Set when the bookmark already existed
    #[serde(rename = "alreadyExists")]
    pub already_exists: Option<String>,
    /// Set when a new bookmark was created
    #[serde(flatten)]
    pub bookmark: Option<Bookmark>,
}

/// Outcome of a bookmark creation request
#[derive(Debug, Clone)]
pub enum BookmarkOutcome {
    /// A new bookmark was created
    Created(Bookmark),
    /// The place was already bookmarked by this user
    AlreadyExists,
}
