pub mod chat;
pub mod goal;
