/// Module containing the authentication handler implementation
pub mod auth;
/// Module containing the session model and authenticator trait
pub mod interface;
/// Module containing response models for the auth endpoints
pub mod response;
