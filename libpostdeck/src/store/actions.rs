//! Actions for the posts store
//!
//! All state transitions are triggered by actions: immutable values
//! describing what happened, applied to state by the reducer (see
//! `reducer.rs`). The serde representation keeps the `"entity/event"` type
//! tags so dispatched actions can be logged or replayed in their familiar
//! wire shape.

use serde::{Deserialize, Serialize};

use crate::types::{Post, ReactionKind};

/// Actions that trigger feed state transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    /// A post was composed locally; carries the fully built post
    #[serde(rename = "posts/postAdded")]
    PostAdded(Post),

    /// A reaction was given to a post
    #[serde(rename = "posts/reactionAdded")]
    ReactionAdded {
        #[serde(rename = "postId")]
        post_id: String,
        reaction: ReactionKind,
    },

    /// Title and content of an existing post were edited
    #[serde(rename = "posts/postUpdated")]
    PostUpdated {
        id: String,
        title: String,
        content: String,
    },

    /// A feed fetch started
    #[serde(rename = "posts/fetchPosts/pending")]
    FetchPostsPending,

    /// A feed fetch completed with the server's post list
    #[serde(rename = "posts/fetchPosts/fulfilled")]
    FetchPostsFulfilled(Vec<Post>),

    /// A feed fetch failed
    #[serde(rename = "posts/fetchPosts/rejected")]
    FetchPostsRejected { error: String },

    /// The server accepted a created post and returned its canonical form
    #[serde(rename = "posts/addNewPost/fulfilled")]
    AddNewPostFulfilled(Post),
}

impl Action {
    /// Build a `PostAdded` action for a locally composed post
    ///
    /// The id and timestamp are generated here, at construction time, so
    /// the reducer itself stays pure.
    pub fn post_added(
        title: impl Into<String>,
        content: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Action::PostAdded(Post::new(title.into(), content.into(), user.into()))
    }

    /// The action's type tag, as used on the wire and in logs
    pub fn type_tag(&self) -> &'static str {
        match self {
            Action::PostAdded(_) => "posts/postAdded",
            Action::ReactionAdded { .. } => "posts/reactionAdded",
            Action::PostUpdated { .. } => "posts/postUpdated",
            Action::FetchPostsPending => "posts/fetchPosts/pending",
            Action::FetchPostsFulfilled(_) => "posts/fetchPosts/fulfilled",
            Action::FetchPostsRejected { .. } => "posts/fetchPosts/rejected",
            Action::AddNewPostFulfilled(_) => "posts/addNewPost/fulfilled",
        }
    }
}
