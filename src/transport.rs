//! HTTP transport for the remote Assistants API.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::time::Duration;
use tracing::debug;
use url::Url;
use uuid::Uuid;

/// Default production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Beta gate required by the Assistants v2 endpoints.
const ASSISTANTS_BETA: &str = "assistants=v2";

/// Blocking-free HTTP layer shared by all client operations.
///
/// Holds the credential explicitly; nothing is written to process-wide state.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    /// Build a transport for the given endpoint and credential.
    ///
    /// Minimal production-friendly defaults, env-overridable:
    /// - `ASSISTANT_KIT_HTTP_TIMEOUT_SECS` (default 30)
    /// - `ASSISTANT_KIT_PROXY_URL`
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::Configuration(format!("invalid base URL '{}': {}", base_url, e))
        })?;

        let timeout_secs = env::var("ASSISTANT_KIT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(timeout_secs));

        if let Ok(proxy_url) = env::var("ASSISTANT_KIT_PROXY_URL") {
            if let Ok(proxy) = reqwest::Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder.build().map_err(Error::Transport)?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Credential this transport authenticates with.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Endpoint this transport talks to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let request_id = Uuid::new_v4().to_string();
        debug!(%url, %request_id, "POST");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", ASSISTANTS_BETA)
            .header("x-request-id", &request_id)
            .json(body)
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// GET with query parameters and decode the JSON response.
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let request_id = Uuid::new_v4().to_string();
        debug!(%url, %request_id, "GET");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", ASSISTANTS_BETA)
            .header("x-request-id", &request_id)
            .query(query)
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// Resolve a resource path against the base URL.
    ///
    /// The base URL may carry its own path segment (`/v1`), so the resource
    /// path is appended rather than URL-joined.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            path
        );
        Url::parse(&joined)
            .map_err(|e| Error::Configuration(format!("invalid request path '{}': {}", path, e)))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::remote(status.as_u16(), &body))
        }
    }
}
