//! Assistant, thread, and run operations.

use crate::client::builder::AssistantClientBuilder;
use crate::config::AssistantConfig;
use crate::transport::HttpTransport;
use crate::types::{
    Assistant, AssistantId, CreateRunRequest, CreateThreadRequest, ListResponse, MessageRequest,
    MessageRole, Run, RunId, RunStatus, Thread, ThreadId, ThreadMessage,
};
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Client for the remote Assistants API.
///
/// Every operation is a forward to the remote service; the only local state
/// is the credential and the polling knobs.
pub struct AssistantClient {
    transport: HttpTransport,
    poll_interval: Duration,
    run_timeout: Duration,
}

impl AssistantClient {
    /// Build a client with defaults, resolving the credential from the
    /// environment. Shorthand for `AssistantClientBuilder::new().build()`.
    pub fn new() -> Result<Self> {
        AssistantClientBuilder::new().build()
    }

    pub(crate) fn from_parts(
        transport: HttpTransport,
        poll_interval: Duration,
        run_timeout: Duration,
    ) -> Self {
        Self {
            transport,
            poll_interval,
            run_timeout,
        }
    }

    /// Credential currently in use.
    pub fn api_key(&self) -> &str {
        self.transport.api_key()
    }

    /// Create an assistant from a definition mapping.
    ///
    /// The mapping is forwarded verbatim; the service validates the keys.
    pub async fn create_assistant(&self, config: &AssistantConfig) -> Result<Assistant> {
        let assistant: Assistant = self.transport.post_json("/assistants", config.as_map()).await?;
        info!(assistant_id = %assistant.id, model = %assistant.model, "assistant created");
        Ok(assistant)
    }

    /// Load a YAML definition and create the assistant it describes.
    ///
    /// Short-circuits before any network call when loading fails.
    pub async fn create_assistant_from_path(&self, path: impl AsRef<Path>) -> Result<Assistant> {
        let config = AssistantConfig::from_path(path).await?;
        self.create_assistant(&config).await
    }

    /// Create a thread seeded with one user message.
    ///
    /// The service's thread object has no assistant field; the association the
    /// caller supplied is recorded in the thread metadata.
    pub async fn create_thread(&self, assistant: &AssistantId, seed: &str) -> Result<Thread> {
        let body = CreateThreadRequest {
            messages: vec![MessageRequest::user(seed)],
            metadata: HashMap::from([("assistant_id".to_string(), assistant.to_string())]),
        };
        let thread: Thread = self.transport.post_json("/threads", &body).await?;
        info!(thread_id = %thread.id, assistant_id = %assistant, "thread created");
        Ok(thread)
    }

    /// Append a user message, run the assistant, and return the reply text.
    ///
    /// The run is polled until it reaches a terminal status; the message list
    /// is never assumed to be populated synchronously.
    pub async fn send_message(
        &self,
        thread: &ThreadId,
        assistant: &AssistantId,
        text: &str,
    ) -> Result<String> {
        self.append_user_message(thread, text).await?;
        let run = self.create_run(thread, assistant).await?;
        let run = self.wait_for_run(thread, run).await?;

        match run.status {
            RunStatus::Completed => self.latest_assistant_reply(thread, &run.id).await,
            status => {
                let message = run
                    .last_error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "no error detail reported".to_string());
                warn!(run_id = %run.id, %status, %message, "run ended without completing");
                Err(Error::RunFailed {
                    run_id: run.id,
                    status,
                    message,
                })
            }
        }
    }

    /// Messages on a thread, newest first.
    pub async fn list_messages(&self, thread: &ThreadId) -> Result<Vec<ThreadMessage>> {
        let page: ListResponse<ThreadMessage> = self
            .transport
            .get_json(&format!("/threads/{}/messages", thread), &[("order", "desc")])
            .await?;
        Ok(page.data)
    }

    /// Single observation of a run's status.
    ///
    /// [`send_message`](Self::send_message) polls with this internally; it is
    /// public for callers that manage their own cadence.
    pub async fn retrieve_run(&self, thread: &ThreadId, run: &RunId) -> Result<Run> {
        self.transport
            .get_json(&format!("/threads/{}/runs/{}", thread, run), &[])
            .await
    }

    async fn append_user_message(&self, thread: &ThreadId, text: &str) -> Result<ThreadMessage> {
        self.transport
            .post_json(
                &format!("/threads/{}/messages", thread),
                &MessageRequest::user(text),
            )
            .await
    }

    async fn create_run(&self, thread: &ThreadId, assistant: &AssistantId) -> Result<Run> {
        let body = CreateRunRequest {
            assistant_id: assistant.clone(),
        };
        let run: Run = self
            .transport
            .post_json(&format!("/threads/{}/runs", thread), &body)
            .await?;
        debug!(run_id = %run.id, status = %run.status, "run created");
        Ok(run)
    }

    async fn wait_for_run(&self, thread: &ThreadId, mut run: Run) -> Result<Run> {
        let deadline = Instant::now() + self.run_timeout;

        while !run.status.is_terminal() {
            if Instant::now() >= deadline {
                return Err(Error::RunTimedOut {
                    run_id: run.id,
                    timeout: self.run_timeout,
                });
            }
            sleep(self.poll_interval).await;
            run = self.retrieve_run(thread, &run.id).await?;
            debug!(run_id = %run.id, status = %run.status, "run polled");
        }

        Ok(run)
    }

    /// Newest assistant message produced by the given run.
    ///
    /// Messages that predate run ids on the service side carry none; those are
    /// accepted as long as the role matches.
    async fn latest_assistant_reply(&self, thread: &ThreadId, run: &RunId) -> Result<String> {
        let messages = self.list_messages(thread).await?;
        messages
            .iter()
            .find(|m| {
                m.role == MessageRole::Assistant
                    && m.run_id.as_ref().map_or(true, |id| id == run)
            })
            .map(ThreadMessage::text)
            .ok_or_else(|| Error::EmptyRun {
                run_id: run.clone(),
            })
    }
}
