//! Pure reducer function for feed state transitions
//!
//! The reducer is a pure function `(State, Action) -> State`: no network,
//! no I/O, no clock, deterministic. All side effects (id generation,
//! timestamps, HTTP) happen before an action is constructed or dispatched.

use super::actions::Action;
use super::state::PostsState;
use crate::types::RequestStatus;

/// Pure reducer function
///
/// Takes the current state and an action, returns the new state. Total:
/// every action is handled and no arm can fail. Actions that target a
/// missing post (`ReactionAdded`, `PostUpdated` with an unknown id) are
/// silent no-ops, not errors.
pub fn reduce(state: PostsState, action: Action) -> PostsState {
    match action {
        Action::PostAdded(post) => {
            let mut posts = state.posts;
            posts.push(post);
            PostsState { posts, ..state }
        }

        Action::ReactionAdded { post_id, reaction } => {
            let mut posts = state.posts;
            if let Some(post) = posts.iter_mut().find(|post| post.id == post_id) {
                post.reactions.increment(reaction);
            }
            PostsState { posts, ..state }
        }

        Action::PostUpdated { id, title, content } => {
            let mut posts = state.posts;
            if let Some(post) = posts.iter_mut().find(|post| post.id == id) {
                post.title = title;
                post.content = content;
            }
            PostsState { posts, ..state }
        }

        Action::FetchPostsPending => PostsState {
            status: RequestStatus::Loading,
            ..state
        },

        // Concatenation, not replacement: a second fetch appends its whole
        // payload again rather than deduplicating.
        Action::FetchPostsFulfilled(payload) => {
            let mut posts = state.posts;
            posts.extend(payload);
            PostsState {
                posts,
                status: RequestStatus::Succeeded,
                ..state
            }
        }

        Action::FetchPostsRejected { error } => PostsState {
            status: RequestStatus::Failed,
            error: Some(error),
            ..state
        },

        // The create lifecycle never touches status or error.
        Action::AddNewPostFulfilled(post) => {
            let mut posts = state.posts;
            posts.push(post);
            PostsState { posts, ..state }
        }
    }
}
