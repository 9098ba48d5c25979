//! goalchat-llm
//!
//! Hosted chat-completion invocation. The gateway depends on the
//! [`chat::ChatCompletion`] trait; [`azure`] is the production backend.

pub mod azure;
pub mod chat;
pub mod error;
pub mod params;
