//! # Placemark Client
//!
//! Client-side core for the Placemark place directory. The crate owns
//! three things the rest of the application builds on:
//!
//! - a **shared HTTP transport** configured once at startup with the
//!   API base URL and credential forwarding (a cookie store that
//!   captures and replays the JWT auth cookies),
//! - the **session lifecycle**: login, proactive token refresh and
//!   logout against the API's JWT cookie endpoints,
//! - the **effect root**: forks the long-lived background handlers
//!   (authentication keeper, place feed sync) as detached tasks whose
//!   failures stay isolated from each other.
//!
//! ## Quick start
//!
//! ```ignore
//! use placemark_client::prelude::*;
//!
//! setup_logger();
//! let client = Client::new(Config::new())?;
//!
//! let (root, mut feed) = client.effect_root();
//! let supervisor = root.start();
//!
//! // The handlers run for the life of the process; the feed receiver
//! // sees a fresh snapshot after every sync tick.
//! feed.changed().await?;
//! ```

/// Application layer: configuration, models, services and rate limiting
pub mod application;
/// High-level client facade
pub mod client;
/// Crate-wide tuning constants
pub mod constants;
/// Background effect handlers and the effect root
pub mod effects;
/// Error types
pub mod error;
/// Authentication and session management
pub mod session;
/// Shared HTTP transport
pub mod transport;
/// Helper utilities
pub mod utils;

/// Convenient re-exports of the most used types
pub mod prelude;

/// Alias so configuration can be imported as `placemark_client::config`
pub mod config {
    pub use crate::application::config::*;
}

/// Library version, taken from the crate metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
