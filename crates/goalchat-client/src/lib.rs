//! goalchat-client library root.
//!
//! Re-exports internal modules so that examples and integration tests
//! can exercise the conversation flow without going through the terminal
//! front end.

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod render;
