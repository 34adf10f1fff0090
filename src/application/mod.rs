/// Module containing the client configuration
pub mod config;
/// Module containing serde models for API payloads
pub mod models;
/// Module containing rate limiting for API requests
pub mod rate_limiter;
/// Module containing the typed API services
pub mod services;
