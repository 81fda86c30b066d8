//! Thread resource and its creation payload.

use super::id::ThreadId;
use super::message::MessageRequest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A remote-held conversation session.
#[derive(Debug, Clone, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub object: String,
    pub created_at: i64,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}

impl Thread {
    /// Assistant this thread was created for, if recorded in its metadata.
    pub fn assistant_id(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get("assistant_id"))
            .map(String::as_str)
    }
}

/// Body of a create-thread request: seed messages plus metadata.
///
/// The thread object itself has no assistant field, so the association the
/// caller supplied is preserved in the metadata instead of being dropped.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateThreadRequest {
    pub messages: Vec<MessageRequest>,
    pub metadata: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_exposes_recorded_assistant() {
        let body = r#"{
            "id": "thread_1",
            "object": "thread",
            "created_at": 1699009709,
            "metadata": {"assistant_id": "asst_abc123"}
        }"#;
        let thread: Thread = serde_json::from_str(body).unwrap();
        assert_eq!(thread.assistant_id(), Some("asst_abc123"));
    }

    #[test]
    fn test_thread_without_metadata() {
        let body = r#"{"id": "thread_2", "object": "thread", "created_at": 0}"#;
        let thread: Thread = serde_json::from_str(body).unwrap();
        assert!(thread.assistant_id().is_none());
    }
}
