//! Read-only projections over feed state
//!
//! Selectors are pure borrowing functions; they never mutate state and
//! never allocate.

use super::state::PostsState;
use crate::types::Post;

/// All posts, in arrival order
pub fn select_all_posts(state: &PostsState) -> &[Post] {
    &state.posts
}

/// First post with the given id, or `None`
pub fn select_post_by_id<'a>(state: &'a PostsState, id: &str) -> Option<&'a Post> {
    state.posts.iter().find(|post| post.id == id)
}
