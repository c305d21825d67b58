//! The posts store
//!
//! Core architecture of the library:
//! - Actions: what can happen to the feed
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//! - PostsStore: owning handle that sequences actions and runs the
//!   network-backed operations
//!
//! All state transitions go through the reducer; the store is the single
//! authorized mutation entry point.

pub mod actions;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use actions::Action;
pub use reducer::reduce;
pub use selectors::{select_all_posts, select_post_by_id};
pub use state::PostsState;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::transport::Transport;
use crate::types::{NewPost, Post};

/// Owning handle over the feed state
///
/// Holds the current [`PostsState`] and the transport used by the two
/// network-backed operations. Mutation happens only through [`dispatch`],
/// which applies one action through the reducer, synchronously and to
/// completion. The `&mut self` receivers serialize all mutation; nothing
/// here needs a lock.
///
/// Overlapping fetches (e.g. two tasks each holding their own store over
/// the same backend) are not coordinated: each applies its own lifecycle
/// actions in arrival order and fulfilled payloads concatenate. That is an
/// accepted limitation, not something the store guards against.
///
/// [`dispatch`]: PostsStore::dispatch
pub struct PostsStore {
    state: PostsState,
    transport: Arc<dyn Transport>,
}

impl PostsStore {
    /// Create a store with empty state over the given transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            state: PostsState::new(),
            transport,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &PostsState {
        &self.state
    }

    /// Apply one action through the reducer
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = %action.type_tag(), "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Fetch all posts from the backend
    ///
    /// Dispatches the pending action, awaits the transport, then dispatches
    /// fulfilled or rejected. A transport failure is recorded in state
    /// (`status` = Failed, `error` = message) rather than returned; callers
    /// read the outcome from the state.
    pub async fn fetch_posts(&mut self) {
        self.dispatch(Action::FetchPostsPending);
        match self.transport.fetch_posts().await {
            Ok(posts) => {
                info!(count = posts.len(), "fetched posts");
                self.dispatch(Action::FetchPostsFulfilled(posts));
            }
            Err(e) => {
                warn!("fetch failed: {}", e);
                self.dispatch(Action::FetchPostsRejected {
                    error: e.to_string(),
                });
            }
        }
    }

    /// Create a post on the backend and append the server's canonical copy
    ///
    /// Unlike [`fetch_posts`], a failure here is propagated to the caller
    /// and state is left untouched — there is no rejected action and
    /// `status` never changes. The asymmetry is long-standing intended
    /// behavior; do not fold create failures into the fetch status field.
    ///
    /// [`fetch_posts`]: PostsStore::fetch_posts
    pub async fn add_new_post(&mut self, new_post: NewPost) -> Result<Post> {
        let post = self.transport.create_post(&new_post).await?;
        info!(id = %post.id, "created post");
        self.dispatch(Action::AddNewPostFulfilled(post.clone()));
        Ok(post)
    }

    /// All posts, in arrival order
    pub fn posts(&self) -> &[Post] {
        select_all_posts(&self.state)
    }

    /// First post with the given id, if any
    pub fn post_by_id(&self, id: &str) -> Option<&Post> {
        select_post_by_id(&self.state, id)
    }
}
