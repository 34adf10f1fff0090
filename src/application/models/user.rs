use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Primary key of the user
    pub pk: u64,
    /// Login name
    pub username: String,
    /// Contact email
    pub email: Option<String>,
    /// Display nickname
    pub nickname: Option<String>,
}
