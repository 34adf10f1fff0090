/// Module containing the HTTP transport seam and its reqwest implementation
pub mod http_client;

pub use http_client::*;
