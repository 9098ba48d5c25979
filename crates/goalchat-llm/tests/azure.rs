use goalchat_core::models::chat::ChatMessage;
use goalchat_llm::azure::{AzureConfig, AzureOpenAiClient, parse_completion};
use goalchat_llm::error::LlmError;
use goalchat_llm::params::GenerationParams;

fn client(model: &str, params: GenerationParams) -> AzureOpenAiClient {
    AzureOpenAiClient::new(AzureConfig {
        endpoint: "https://example.openai.azure.com/".to_string(),
        api_key: "test-key".to_string(),
        deployment: "coach-gpt4o".to_string(),
        api_version: "2024-04-01-preview".to_string(),
        model: model.to_string(),
        params,
    })
}

#[test]
fn url_targets_deployment_and_api_version() {
    let client = client("gpt-4o", GenerationParams::Temperature(0.7));
    assert_eq!(
        client.completions_url(),
        "https://example.openai.azure.com/openai/deployments/coach-gpt4o/chat/completions?api-version=2024-04-01-preview"
    );
}

#[test]
fn body_carries_full_history_and_temperature() {
    let client = client("gpt-4o", GenerationParams::Temperature(0.5));
    let history = vec![
        ChatMessage::system("P"),
        ChatMessage::user("I want to travel"),
    ];

    let body = client.request_body(&history).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "messages": [
                { "role": "system", "content": "P" },
                { "role": "user", "content": "I want to travel" }
            ],
            "model": "gpt-4o",
            "stream": false,
            "temperature": 0.5
        })
    );
}

#[test]
fn reasoning_model_body_uses_token_budget() {
    let client = client("o3-mini", GenerationParams::MaxCompletionTokens(2048));
    let body = client.request_body(&[ChatMessage::user("hi")]).unwrap();

    assert_eq!(body["max_completion_tokens"], 2048);
    assert!(body.get("temperature").is_none());
}

#[test]
fn first_choice_content_is_returned() {
    let body = r#"{
        "id": "chatcmpl-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": "{\"text\":\"Got it!\"}" } },
            { "index": 1, "message": { "role": "assistant", "content": "ignored" } }
        ]
    }"#;
    assert_eq!(parse_completion(body).unwrap(), r#"{"text":"Got it!"}"#);
}

#[test]
fn null_content_becomes_empty_string() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
    assert_eq!(parse_completion(body).unwrap(), "");
}

#[test]
fn missing_choices_is_a_parse_error() {
    for body in [r#"{"choices":[]}"#, r#"{"error":"x"}"#, "not json"] {
        assert!(matches!(
            parse_completion(body),
            Err(LlmError::ResponseParse(_))
        ));
    }
}

/// Live check against a real deployment.
///
/// Run with: `cargo test -p goalchat-llm --test azure -- --ignored`
#[tokio::test]
#[ignore]
async fn live_completion_round_trip() {
    use goalchat_llm::chat::respond;

    let endpoint = std::env::var("AZURE_OPENAI_ENDPOINT").unwrap();
    let api_key = std::env::var("AZURE_OPEN_AI_KEY").unwrap();
    let client = AzureOpenAiClient::new(AzureConfig {
        endpoint,
        api_key,
        deployment: std::env::var("AZURE_OPENAI_DEPLOYMENT")
            .unwrap_or_else(|_| "ispai-test-gpt4o".to_string()),
        api_version: "2024-04-01-preview".to_string(),
        model: "gpt-4o".to_string(),
        params: GenerationParams::Temperature(0.7),
    });

    let history = vec![
        ChatMessage::system(goalchat_core::prompt::DEFAULT_SYSTEM_PROMPT),
        ChatMessage::user("I want to travel to the USA"),
    ];
    let updated = respond(&client, history).await.unwrap();
    println!("{}", updated[2].content());
    assert_eq!(updated.len(), 3);
}
