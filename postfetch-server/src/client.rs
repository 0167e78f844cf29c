use async_trait::async_trait;
use postfetch_engine::{HttpError, JsonClient};
use serde_json::Value;

/// [`JsonClient`] backed by a shared `reqwest::Client`. Timeouts are whatever
/// the wrapped client was built with.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<reqwest::Client> for ReqwestClient {
    fn from(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonClient for ReqwestClient {
    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        tracing::debug!("requesting {}", url);
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", url, status);
            return Err(HttpError::Status(status.as_u16()));
        }

        res.json::<Value>()
            .await
            .map_err(|e| HttpError::Decode(e.to_string()))
    }
}
