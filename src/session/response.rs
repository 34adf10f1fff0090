use crate::application::models::user::User;

/// Response structure for the login endpoint
#[derive(serde::Deserialize, Debug)]
pub struct LoginResp {
    /// JWT access token, also set as a cookie
    pub access_token: String,
    /// JWT refresh token, also set as a cookie
    pub refresh_token: String,
    /// The logged-in user
    pub user: User,
}

/// Request model for the login endpoint
#[derive(serde::Serialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Account password
    pub password: String,
}

/// Response structure for the token refresh endpoint
#[derive(serde::Deserialize, Debug)]
pub struct RefreshResp {
    /// The fresh access token
    pub access: String,
}

/// Request model for the token refresh endpoint
#[derive(serde::Serialize)]
pub struct RefreshRequest {
    /// The refresh token being exchanged
    pub refresh: String,
}

/// Generic detail message returned by logout and error replies
#[derive(serde::Deserialize, Debug)]
pub struct DetailResp {
    /// Human-readable outcome message
    pub detail: String,
}
