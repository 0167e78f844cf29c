use async_trait::async_trait;
use serde_json::Value;

use crate::error::HttpError;

/// Minimal capability `PostFetcher` needs from an HTTP stack: GET a URL and
/// hand back the decoded JSON body.
#[async_trait]
pub trait JsonClient: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, HttpError>;
}

#[async_trait]
impl<C> JsonClient for &C
where
    C: JsonClient + ?Sized,
{
    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        (**self).get_json(url).await
    }
}

#[async_trait]
impl<C> JsonClient for std::sync::Arc<C>
where
    C: JsonClient + ?Sized,
{
    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        (**self).get_json(url).await
    }
}
