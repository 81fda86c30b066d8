//! Builder for [`AssistantClient`] with explicit credential resolution.

use crate::client::core::AssistantClient;
use crate::transport::{HttpTransport, DEFAULT_BASE_URL};
use crate::{Error, Result};
use std::time::Duration;

/// Environment variable consulted when no explicit key is supplied.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Keyring service/user for the last-resort credential lookup.
const KEYRING_SERVICE: &str = "assistant-kit";
const KEYRING_USER: &str = "openai";

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct AssistantClientBuilder {
    api_key: Option<String>,
    base_url: String,
    poll_interval: Duration,
    run_timeout: Duration,
}

impl AssistantClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: Duration::from_millis(500),
            run_timeout: Duration::from_secs(120),
        }
    }

    /// Set the credential explicitly.
    ///
    /// Takes precedence over the environment and the OS keyring.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the remote endpoint.
    ///
    /// This is primarily for testing with mock servers and for self-hosted
    /// gateways that speak the same protocol.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Cadence of run-status polls during [`AssistantClient::send_message`].
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Upper bound on how long a run may stay non-terminal before
    /// [`crate::Error::RunTimedOut`] is returned.
    pub fn run_timeout(mut self, timeout: Duration) -> Self {
        self.run_timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// Credential resolution order: explicit builder value, then
    /// `OPENAI_API_KEY`, then the OS keyring. Missing everywhere is a hard
    /// configuration error.
    pub fn build(self) -> Result<AssistantClient> {
        let api_key = match self.api_key {
            Some(key) if !key.is_empty() => key,
            _ => resolve_api_key().ok_or_else(|| {
                Error::Configuration(format!(
                    "API key is not set; pass one to the builder or set {}",
                    API_KEY_ENV
                ))
            })?,
        };

        let transport = HttpTransport::new(&self.base_url, api_key)?;
        Ok(AssistantClient::from_parts(
            transport,
            self.poll_interval,
            self.run_timeout,
        ))
    }
}

impl Default for AssistantClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_api_key() -> Option<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            return Some(key);
        }
    }

    // Last resort: OS keyring. Lookup failures (no daemon, no entry) just
    // mean the credential is absent.
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    entry.get_password().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is kept inside a single test so parallel tests in
    // this binary never race on OPENAI_API_KEY.
    #[test]
    fn test_credential_resolution_order() {
        std::env::remove_var(API_KEY_ENV);
        let result = AssistantClientBuilder::new().build();
        // Without env and without an explicit key only a keyring entry could
        // satisfy the lookup; absent one this is a configuration error.
        if let Err(err) = result {
            assert!(matches!(err, Error::Configuration(_)));
        }

        std::env::set_var(API_KEY_ENV, "env-key");
        let client = AssistantClientBuilder::new().build().unwrap();
        assert_eq!(client.api_key(), "env-key");

        // Explicit key wins regardless of environment state.
        let client = AssistantClientBuilder::new()
            .api_key("k")
            .build()
            .unwrap();
        assert_eq!(client.api_key(), "k");

        std::env::remove_var(API_KEY_ENV);
    }

    #[test]
    fn test_empty_explicit_key_is_not_a_credential() {
        let result = AssistantClientBuilder::new()
            .api_key("")
            .base_url("https://api.example.com/v1")
            .build();
        // Falls through to env/keyring resolution; with neither set this
        // must fail rather than silently authenticate with "".
        if let Err(err) = result {
            assert!(matches!(err, Error::Configuration(_)));
        } else {
            // A credential was found in the surrounding environment; the
            // explicit empty string still must not be the one in use.
            assert_ne!(result.unwrap().api_key(), "");
        }
    }
}
