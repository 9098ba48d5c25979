use std::sync::Mutex;

use goalchat_core::models::chat::{ChatMessage, Role};
use goalchat_llm::chat::{BoxFuture, ChatCompletion, respond};
use goalchat_llm::error::LlmError;

struct Recording {
    reply: Result<String, String>,
    seen: Mutex<Vec<usize>>,
}

impl ChatCompletion for Recording {
    fn complete<'a>(&'a self, history: &'a [ChatMessage]) -> BoxFuture<'a, Result<String, LlmError>> {
        Box::pin(async move {
            self.seen.lock().unwrap().push(history.len());
            self.reply.clone().map_err(LlmError::Request)
        })
    }
}

#[tokio::test]
async fn appends_exactly_one_assistant_turn() {
    let backend = Recording {
        reply: Ok(r#"{"text":"Got it!"}"#.to_string()),
        seen: Mutex::new(Vec::new()),
    };
    let history = vec![ChatMessage::system("P"), ChatMessage::user("I want to travel")];

    let updated = respond(&backend, history.clone()).await.unwrap();

    assert_eq!(&updated[..2], &history[..]);
    assert_eq!(updated.len(), 3);
    assert_eq!(updated[2].role(), Role::Assistant);
    assert_eq!(updated[2].visible_text(), "Got it!");
    assert_eq!(*backend.seen.lock().unwrap(), vec![2]);
}

#[tokio::test]
async fn backend_failure_propagates() {
    let backend = Recording {
        reply: Err("connection reset".to_string()),
        seen: Mutex::new(Vec::new()),
    };

    let result = respond(&backend, vec![ChatMessage::system("P")]).await;
    assert!(matches!(result, Err(LlmError::Request(_))));
}
