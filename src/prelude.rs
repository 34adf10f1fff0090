//! # Placemark Client Prelude
//!
//! This module provides a convenient way to import the most commonly
//! used types and traits from the Placemark client library.
//!
//! ## Usage
//!
//! ```rust
//! use placemark_client::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Placemark client
pub use crate::application::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error types for the library
pub use crate::error::{AppError, AuthError};

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// High-level client facade
pub use crate::client::Client;

/// Transport seam and its production implementation
pub use crate::transport::http_client::{HttpTransport, RestClient};

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication handler for the Placemark API
pub use crate::session::auth::PlaceAuth;

/// Session model and authenticator trait
pub use crate::session::interface::{Authenticator, Session};

// ============================================================================
// EFFECT HANDLERS
// ============================================================================

/// Effect root, supervisor handle and the handler seam
pub use crate::effects::{EffectHandler, EffectRoot, EffectRootHandle};

/// The production effect handlers and the feed snapshot they publish
pub use crate::effects::{FeedSnapshot, PlaceSync, SessionKeeper};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Place service trait for directory reads
pub use crate::application::services::{BookmarkService, PlaceService};

// ============================================================================
// MODELS
// ============================================================================

/// Common API payload models
pub use crate::application::models::{
    Bookmark, BookmarkOutcome, Page, Place, Review, User,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup helper
pub use crate::utils::logger::setup_logger;
