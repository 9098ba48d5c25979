pub mod health;
pub mod llm;
