use goalchat_core::keys;
use goalchat_core::models::chat::ChatMessage;
use goalchat_storage::error::StorageError;
use goalchat_storage::state::{load_state, save_state};
use goalchat_storage::store::{FileStore, KeyValueStore, MemoryStore};

#[test]
fn missing_key_is_absent_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.load(keys::SYSTEM_PROMPT).unwrap(), None);
}

#[test]
fn missing_directory_is_absent_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("not-created-yet"));
    assert_eq!(store.load(keys::CHAT_MESSAGES).unwrap(), None);
}

#[test]
fn file_store_saves_and_loads_text() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("data"));

    store.save(keys::SYSTEM_PROMPT, "You are a coach.\n").unwrap();
    assert_eq!(
        store.load(keys::SYSTEM_PROMPT).unwrap().as_deref(),
        Some("You are a coach.\n")
    );

    store.save(keys::SYSTEM_PROMPT, "Second").unwrap();
    assert_eq!(
        store.load(keys::SYSTEM_PROMPT).unwrap().as_deref(),
        Some("Second")
    );
    assert!(!dir.path().join("data").join("chatbotPrompt.tmp").exists());
}

#[test]
fn keys_that_are_not_plain_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    for key in ["", "../escape", "a/b", "with space"] {
        assert!(matches!(
            store.save(key, "x"),
            Err(StorageError::InvalidKey { .. })
        ));
    }
}

#[test]
fn history_round_trips_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let history = vec![
        ChatMessage::system("P"),
        ChatMessage::user("I want to travel"),
        ChatMessage::assistant(r#"{"text":"Got it!"}"#),
    ];

    save_state(&store, keys::CHAT_MESSAGES, &history).unwrap();
    let reloaded: Vec<ChatMessage> = load_state(&store, keys::CHAT_MESSAGES).unwrap().unwrap();

    assert_eq!(reloaded, history);
    assert_eq!(reloaded[2].visible_text(), "Got it!");
}

#[test]
fn stored_history_uses_role_and_content_only() {
    let store = MemoryStore::new();
    save_state(&store, keys::CHAT_MESSAGES, &[ChatMessage::user("Hello")]).unwrap();

    assert_eq!(
        store.load(keys::CHAT_MESSAGES).unwrap().as_deref(),
        Some(r#"[{"role":"user","content":"Hello"}]"#)
    );
}

#[test]
fn corrupt_json_is_a_serialization_error() {
    let store = MemoryStore::with_values([(keys::CHAT_MESSAGES, "[{\"role\":")]);
    let result: Result<Option<Vec<ChatMessage>>, _> = load_state(&store, keys::CHAT_MESSAGES);
    assert!(matches!(result, Err(StorageError::Serialization(_))));
}
