//! Long-lived background effect handlers and the root that forks them
//!
//! An effect handler is a background task that reacts to time and
//! application state and performs side effects (network calls) outside
//! any request path. The [`root::EffectRoot`] forks every registered
//! handler as a detached task at application start; a handler that dies
//! never takes down its siblings.

/// Module containing the session keeper handler
pub mod auth_handler;
/// Module containing the place feed handler
pub mod place_handler;
/// Module containing the effect root and its supervisor handle
pub mod root;

pub use auth_handler::SessionKeeper;
pub use place_handler::{FeedSnapshot, PlaceSync};
pub use root::{EffectRoot, EffectRootHandle};

use crate::error::AppError;
use std::sync::Arc;

/// A long-lived background task the effect root can fork
///
/// Implementations loop forever under normal operation; returning is
/// itself an event worth logging. Errors must be absorbed and retried
/// internally where recovery makes sense - an `Err` escaping `run`
/// terminates only that handler.
#[async_trait::async_trait]
pub trait EffectHandler: Send + Sync {
    /// Stable name used in logs and the supervisor handle
    fn name(&self) -> &str;

    /// The handler's main loop
    async fn run(self: Arc<Self>) -> Result<(), AppError>;
}
