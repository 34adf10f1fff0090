use serde::{Deserialize, Serialize};

/// A place in the directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier for the place
    pub id: u64,
    /// Display name of the place
    pub name: String,
    /// Street address
    pub address: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Category slug (e.g. "korean", "cafe")
    pub category: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Number of users who bookmarked this place
    pub bookmark_count: u32,
    /// Average review rating, absent while unreviewed
    pub rating: Option<f64>,
}

/// A review left on a place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier for the review
    pub id: u64,
    /// Identifier of the reviewed place
    pub place: u64,
    /// Username of the author
    pub user: String,
    /// Review body
    pub content: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
}
