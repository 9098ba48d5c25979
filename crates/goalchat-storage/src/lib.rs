//! goalchat-storage
//!
//! Client-side key-value persistence. Each key maps to one text value; typed
//! helpers in [`state`] layer JSON on top.

pub mod error;
pub mod state;
pub mod store;
