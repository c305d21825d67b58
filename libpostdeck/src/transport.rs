//! REST transport for the posts API
//!
//! The store never talks to the network directly; it goes through the
//! [`Transport`] trait so that tests (and alternative backends) can swap in
//! their own implementation. The wire format wraps every payload in a
//! `{"data": ...}` envelope.
//!
//! # Examples
//!
//! ```no_run
//! use libpostdeck::transport::{HttpTransport, Transport};
//!
//! # async fn example() -> libpostdeck::Result<()> {
//! let transport = HttpTransport::new("http://localhost:3000/fakeApi".to_string());
//! let posts = transport.fetch_posts().await?;
//! println!("Fetched {} posts", posts.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TransportError};
use crate::types::{NewPost, Post};

/// Response envelope used by the posts API
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Async interface to the posts backend
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the full list of posts (GET /posts)
    async fn fetch_posts(&self) -> Result<Vec<Post>>;

    /// Create a post on the server and return its canonical form
    /// (POST /posts)
    async fn create_post(&self, new_post: &NewPost) -> Result<Post>;
}

/// HTTP implementation of [`Transport`] over a configured base URL
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the API rooted at `base_url`
    /// (no trailing slash)
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(response).await
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.get("/posts").await
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<Post> {
        self.post("/posts", new_post).await
    }
}
