//! Assistant resource as returned by the remote service.

use super::id::AssistantId;
use serde::Deserialize;
use std::collections::HashMap;

/// A remotely configured conversational agent.
///
/// Besides the opaque [`AssistantId`] the service echoes back the accepted
/// definition fields; they are kept for inspection but nothing locally
/// depends on them.
#[derive(Debug, Clone, Deserialize)]
pub struct Assistant {
    pub id: AssistantId,
    pub object: String,
    pub created_at: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub model: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}
