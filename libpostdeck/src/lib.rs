//! Postdeck - client-side state container for a posts feed
//!
//! This library keeps an in-memory collection of posts and routes every
//! change through a single pure transition function. Network-backed
//! operations (fetching the feed, creating a post) run against a pluggable
//! REST transport and feed their results back in as lifecycle actions.

pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{PostdeckError, Result};
pub use store::{reduce, Action, PostsState, PostsStore};
pub use transport::{HttpTransport, Transport};
pub use types::{NewPost, Post, ReactionKind, Reactions, RequestStatus};
