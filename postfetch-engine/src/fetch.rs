use tracing::{debug, warn};

use crate::error::FetchError;
use crate::http::JsonClient;
use crate::types::Post;

pub const DEFAULT_POSTS_URL: &str = "http://localhost:3000/posts";

/// Reads the post list from a single endpoint through an injected
/// [`JsonClient`].
#[derive(Debug, Clone)]
pub struct PostFetcher<C> {
    client: C,
    url: String,
}

impl<C: JsonClient> PostFetcher<C> {
    pub fn new(client: C) -> Self {
        Self::with_url(client, DEFAULT_POSTS_URL)
    }

    pub fn with_url(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Issues one GET against the configured endpoint and returns the posts
    /// exactly as served.
    ///
    /// Every failure, whether transport, status or payload shape, collapses
    /// into [`FetchError`]. The cause is logged and then dropped.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        debug!("requesting {}", self.url);
        let body = self.client.get_json(&self.url).await.map_err(|e| {
            debug!(url = %self.url, error = %e, "request failed");
            warn!("fetching posts from {} failed", self.url);
            FetchError
        })?;

        let posts: Vec<Post> = serde_json::from_value(body).map_err(|e| {
            debug!(url = %self.url, error = %e, "payload is not a post list");
            warn!("fetching posts from {} failed", self.url);
            FetchError
        })?;

        debug!("fetched {} posts from {}", posts.len(), self.url);
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;
    use crate::error::HttpError;
    use crate::types::sample_posts;

    struct Fixed {
        reply: Result<Value, HttpError>,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(reply: Result<Value, HttpError>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl JsonClient for Fixed {
        async fn get_json(&self, _url: &str) -> Result<Value, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    #[test]
    fn default_url() {
        let fetcher = PostFetcher::new(Fixed::new(Ok(json!([]))));
        assert_eq!(fetcher.url(), "http://localhost:3000/posts");
    }

    #[tokio::test]
    async fn empty_array_is_not_an_error() {
        let fetcher = PostFetcher::new(Fixed::new(Ok(json!([]))));
        assert_eq!(fetcher.fetch_posts().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn one_request_per_call() {
        let fetcher = PostFetcher::new(Fixed::new(Ok(serde_json::to_value(sample_posts()).unwrap())));
        fetcher.fetch_posts().await.unwrap();
        fetcher.fetch_posts().await.unwrap();
        assert_eq!(fetcher.client().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn non_array_payload_is_fetch_error() {
        let fetcher = PostFetcher::new(Fixed::new(Ok(json!({"id": 1}))));
        assert_eq!(fetcher.fetch_posts().await, Err(FetchError));
    }

    #[tokio::test]
    async fn status_error_is_fetch_error() {
        let fetcher = PostFetcher::new(Fixed::new(Err(HttpError::Status(404))));
        let err = fetcher.fetch_posts().await.unwrap_err();
        assert_eq!(err.to_string(), "Something wrong when fetching posts!");
    }
}
