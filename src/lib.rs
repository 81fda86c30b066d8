//! # assistant-kit
//!
//! YAML-driven client for the OpenAI Assistants API (v2).
//!
//! ## Overview
//!
//! This library turns a declarative YAML assistant definition into a live
//! remote assistant and gives you the conversation primitives around it:
//! create a thread, append messages, trigger runs, and read the replies.
//! The definition mapping is forwarded verbatim; the remote service is the
//! sole validator of its schema.
//!
//! ## Key Features
//!
//! - **Declarative assistants**: load a definition with [`AssistantConfig`]
//!   and create it with one call
//! - **Explicit credentials**: the key lives in the client you build, not in
//!   process-wide state; resolution falls back from the builder to
//!   `OPENAI_API_KEY` to the OS keyring
//! - **Typed failures**: [`Error`] distinguishes configuration, file,
//!   parse, transport, and remote-service failures, with a `retryable`
//!   classification on remote errors
//! - **Run polling**: [`AssistantClient::send_message`] polls each run to a
//!   terminal status instead of assuming replies appear synchronously
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use assistant_kit::{AssistantClient, AssistantClientBuilder};
//!
//! #[tokio::main]
//! async fn main() -> assistant_kit::Result<()> {
//!     let client = AssistantClientBuilder::new()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let assistant = client.create_assistant_from_path("assistant.yaml").await?;
//!     let thread = client.create_thread(&assistant.id, "Hello!").await?;
//!     let reply = client
//!         .send_message(&thread.id, &assistant.id, "What can you do?")
//!         .await?;
//!     println!("{reply}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client implementation and builder |
//! | [`config`] | YAML assistant definitions |
//! | [`transport`] | HTTP layer over the remote endpoints |
//! | [`types`] | Wire objects (assistants, threads, messages, runs) |

pub mod client;
pub mod config;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{AssistantClient, AssistantClientBuilder};
pub use config::AssistantConfig;
pub use types::{
    Assistant, AssistantId, MessageRole, Run, RunId, RunStatus, Thread, ThreadId, ThreadMessage,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
