//! HTTP client for the item store API.

use crate::error::{ClientError, ClientResult};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use todo_types::{DeleteConfirmation, ErrorBody, Item, ItemId, ItemUpdate, NewItem};
use tracing::debug;

/// Server the client talks to when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Connection settings for [`TodoClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server, without the `/api` prefix.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Thin wrapper over the four item endpoints. One call, one request.
#[derive(Debug, Clone)]
pub struct TodoClient {
    config: ClientConfig,
    client: Client,
}

impl TodoClient {
    /// Creates a client for the configured server.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base url must start with http:// or https://, got '{}'",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Convenience constructor using the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/todos{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// `GET /api/todos`
    pub async fn list(&self) -> ClientResult<Vec<Item>> {
        let response = self.client.get(self.url("")).send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// `POST /api/todos`
    pub async fn create(&self, title: &str) -> ClientResult<Item> {
        debug!("Creating todo '{}'", title);
        let response = self
            .client
            .post(self.url(""))
            .json(&NewItem::new(title))
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// `PUT /api/todos/{id}`
    pub async fn replace(&self, id: ItemId, update: &ItemUpdate) -> ClientResult<Item> {
        debug!("Replacing todo {}", id);
        let response = self
            .client
            .put(self.url(&format!("/{id}")))
            .json(update)
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// `DELETE /api/todos/{id}`
    pub async fn delete(&self, id: ItemId) -> ClientResult<DeleteConfirmation> {
        debug!("Deleting todo {}", id);
        let response = self
            .client
            .delete(self.url(&format!("/{id}")))
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }
}

/// Turns a non-success response into a [`ClientError`], keeping the
/// server's message when the body is an [`ErrorBody`].
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => (Some(body.code), body.error),
        Err(_) if text.is_empty() => (None, status.to_string()),
        Err(_) => (None, text),
    };

    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(message));
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        code,
        message,
    })
}
