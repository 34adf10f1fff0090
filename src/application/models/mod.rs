/// Module containing bookmark models
pub mod bookmark;
/// Module containing place and review models
pub mod place;
/// Module containing user models
pub mod user;

pub use bookmark::*;
pub use place::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// One page of a paginated API listing
///
/// The API paginates every listing endpoint with page numbers; `next`
/// and `previous` carry ready-made URLs or null at either end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Items on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether another page follows this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
