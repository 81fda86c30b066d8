//! Messages on a thread: outgoing payloads and the service's message objects.

use super::id::{AssistantId, RunId, ThreadId};
use serde::{Deserialize, Serialize};

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Outgoing message payload for thread seeding and appends.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    pub role: MessageRole,
    pub content: String,
}

impl MessageRequest {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: text.into(),
        }
    }
}

/// A message stored on a thread, as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadMessage {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    pub thread_id: ThreadId,
    pub role: MessageRole,
    pub content: Vec<MessageContent>,
    #[serde(default)]
    pub run_id: Option<RunId>,
    #[serde(default)]
    pub assistant_id: Option<AssistantId>,
}

impl ThreadMessage {
    /// Concatenated text of all text blocks in this message.
    ///
    /// Non-text blocks (images, unknown future kinds) are skipped.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                MessageContent::Text { text } => Some(text.value.as_str()),
                MessageContent::Unknown => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One content block of a thread message.
///
/// Only text blocks are interpreted; anything else deserializes to `Unknown`
/// so new block kinds on the service side do not break reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum MessageContent {
    #[serde(rename = "text")]
    Text { text: TextContent },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextContent {
    pub value: String,
    #[serde(default)]
    pub annotations: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_request_serializes_role_lowercase() {
        let request = MessageRequest::user("Hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "Hello");
    }

    #[test]
    fn test_thread_message_text_joins_blocks() {
        let body = r#"{
            "id": "msg_1",
            "object": "thread.message",
            "created_at": 1699009709,
            "thread_id": "thread_1",
            "role": "assistant",
            "run_id": "run_1",
            "content": [
                {"type": "text", "text": {"value": "Hello", "annotations": []}},
                {"type": "image_file", "image_file": {"file_id": "file_1"}},
                {"type": "text", "text": {"value": "there"}}
            ]
        }"#;
        let message: ThreadMessage = serde_json::from_str(body).unwrap();
        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.text(), "Hello\nthere");
    }
}
