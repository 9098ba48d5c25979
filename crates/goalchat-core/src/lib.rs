//! goalchat-core
//!
//! Pure domain types, the assistant reply interpreter, storage key names and
//! the built-in coaching prompt. No I/O; this is the shared vocabulary of the
//! goalchat system.

pub mod interpret;
pub mod keys;
pub mod models;
pub mod prompt;
