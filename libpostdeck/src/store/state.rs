//! Feed state
//!
//! Immutable state structure; all transitions happen through the reducer
//! (see `reducer.rs`).

use serde::{Deserialize, Serialize};

use crate::types::{Post, RequestStatus};

/// State of the posts feed
///
/// This is the single source of truth for the feed. Created once, empty and
/// idle; every change is computed by the reducer from the previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostsState {
    /// Posts in arrival order; server-fetched posts land after any posts
    /// already added locally
    pub posts: Vec<Post>,

    /// Load status, driven solely by the fetch lifecycle
    pub status: RequestStatus,

    /// Message of the last failed fetch, if any
    pub error: Option<String>,
}

impl PostsState {
    /// Create the initial state: no posts, idle, no error
    pub fn new() -> Self {
        Self::default()
    }

    /// Is a fetch currently in flight?
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }
}
