//! Typed wire objects for the Assistants API.
//!
//! These mirror the service's JSON resources. Fields the crate does not
//! interpret are either kept as plain data or dropped by serde; the service
//! remains the source of truth for all of them.

pub mod assistant;
pub mod id;
pub mod message;
pub mod run;
pub mod thread;

pub use assistant::Assistant;
pub use id::{AssistantId, RunId, ThreadId};
pub use message::{MessageContent, MessageRequest, MessageRole, TextContent, ThreadMessage};
pub use run::{Run, RunError, RunStatus};
pub use thread::Thread;

pub(crate) use run::CreateRunRequest;
pub(crate) use thread::CreateThreadRequest;

use serde::Deserialize;

/// One page of a list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub object: String,
    pub data: Vec<T>,
    #[serde(default)]
    pub first_id: Option<String>,
    #[serde(default)]
    pub last_id: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}
