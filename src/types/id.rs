//! Opaque identifiers minted by the remote service.
//!
//! The service owns these values; locally they are only carried around and
//! interpolated into request paths. Newtypes keep an assistant id from being
//! passed where a thread id belongs.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

opaque_id! {
    /// Handle of a remotely created assistant.
    AssistantId
}

opaque_id! {
    /// Handle of a conversation thread.
    ThreadId
}

opaque_id! {
    /// Handle of a single inference run on a thread.
    RunId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trips_through_serde() {
        let id = AssistantId::from("asst_abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""asst_abc123""#);
        let back: AssistantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_displays_raw_value() {
        assert_eq!(ThreadId::from("thread_1").to_string(), "thread_1");
    }
}
