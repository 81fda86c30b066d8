//! Assistant definitions loaded from YAML.
//!
//! A definition is an opaque string-keyed mapping forwarded verbatim as the
//! create-assistant request body. No keys are validated locally; the remote
//! service is the sole validator of the schema.

use crate::{Error, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Origin label used for definitions that were not read from a file.
const INLINE_ORIGIN: &str = "<inline>";

/// Declarative assistant definition.
///
/// ```yaml
/// name: Support Bot
/// model: gpt-4o
/// instructions: You answer support tickets politely.
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantConfig {
    fields: Map<String, Value>,
}

impl AssistantConfig {
    /// Load a definition from a YAML file.
    ///
    /// A missing file maps to [`Error::FileNotFound`]; anything that is not a
    /// YAML document with a mapping at the top level maps to [`Error::Parse`].
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: origin.clone(),
                }
            } else {
                Error::Parse {
                    path: origin.clone(),
                    reason: format!("read failed: {}", e),
                }
            }
        })?;

        let content = String::from_utf8(bytes).map_err(|e| Error::Parse {
            path: origin.clone(),
            reason: format!("invalid UTF-8: {}", e),
        })?;

        let config = Self::parse(&content, &origin)?;
        debug!(path = %origin, keys = config.len(), "assistant definition loaded");
        Ok(config)
    }

    /// Parse a definition from an in-memory YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content, INLINE_ORIGIN)
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| Error::Parse {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;

        match value {
            serde_yaml::Value::Mapping(_) => {
                let fields: Map<String, Value> =
                    serde_yaml::from_value(value).map_err(|e| Error::Parse {
                        path: origin.to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(Self { fields })
            }
            other => Err(Error::Parse {
                path: origin.to_string(),
                reason: format!(
                    "top level must be a mapping, found {}",
                    yaml_kind(&other)
                ),
            }),
        }
    }

    /// Value of a top-level key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a top-level key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The definition as the request body it will be sent as.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for AssistantConfig {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_simple_mapping() {
        let config = AssistantConfig::from_yaml_str("name: Bot\nmodel: m1\n").unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("name"), Some(&json!("Bot")));
        assert_eq!(config.get("model"), Some(&json!("m1")));
    }

    #[test]
    fn test_parse_nested_values_pass_through() {
        let yaml = r#"
name: Bot
model: m1
tools:
  - type: code_interpreter
temperature: 0.2
"#;
        let config = AssistantConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.get("tools"), Some(&json!([{"type": "code_interpreter"}])));
        assert_eq!(config.get("temperature"), Some(&json!(0.2)));
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let err = AssistantConfig::from_yaml_str("just a string").unwrap_err();
        match err {
            Error::Parse { reason, .. } => assert!(reason.contains("mapping")),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_invalid_yaml() {
        let err = AssistantConfig::from_yaml_str("name: [unterminated").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_insert_overrides() {
        let mut config = AssistantConfig::from_yaml_str("model: m1").unwrap();
        config.insert("model", "m2");
        assert_eq!(config.get("model"), Some(&json!("m2")));
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let err = AssistantConfig::from_path("does/not/exist.yaml")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
