use std::collections::HashMap;

use goalchat_gateway::config::GatewayConfig;
use goalchat_llm::params::GenerationParams;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

const REQUIRED: [(&str, &str); 2] = [
    ("AZURE_OPENAI_ENDPOINT", "https://example.openai.azure.com"),
    ("AZURE_OPEN_AI_KEY", "secret"),
];

#[test]
fn defaults_apply_when_only_required_vars_are_set() {
    let config = GatewayConfig::from_lookup(lookup(&REQUIRED)).unwrap();

    assert_eq!(config.bind, "0.0.0.0:3000");
    assert_eq!(config.azure.endpoint, "https://example.openai.azure.com");
    assert_eq!(config.azure.api_key, "secret");
    assert_eq!(config.azure.deployment, "ispai-test-gpt4o");
    assert_eq!(config.azure.api_version, "2024-04-01-preview");
    assert_eq!(config.azure.model, "gpt-4o");
    assert_eq!(config.azure.params, GenerationParams::Temperature(0.7));
}

#[test]
fn missing_endpoint_or_key_is_an_error() {
    assert!(GatewayConfig::from_lookup(lookup(&REQUIRED[..1])).is_err());
    assert!(GatewayConfig::from_lookup(lookup(&REQUIRED[1..])).is_err());
    assert!(
        GatewayConfig::from_lookup(lookup(&[
            ("AZURE_OPENAI_ENDPOINT", "  "),
            ("AZURE_OPEN_AI_KEY", "secret"),
        ]))
        .is_err()
    );
}

#[test]
fn reasoning_model_switches_to_token_budget() {
    let mut vars = REQUIRED.to_vec();
    vars.push(("GOALCHAT_MODEL", "o3-mini"));
    vars.push(("GOALCHAT_MAX_TOKENS", "1024"));

    let config = GatewayConfig::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(config.azure.params, GenerationParams::MaxCompletionTokens(1024));
}

#[test]
fn overrides_are_honoured() {
    let mut vars = REQUIRED.to_vec();
    vars.push(("GOALCHAT_TEMPERATURE", "0.2"));
    vars.push(("GOALCHAT_BIND", "127.0.0.1:8080"));
    vars.push(("AZURE_OPENAI_DEPLOYMENT", "coach"));

    let config = GatewayConfig::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(config.azure.params, GenerationParams::Temperature(0.2));
    assert_eq!(config.bind, "127.0.0.1:8080");
    assert_eq!(config.azure.deployment, "coach");
}

#[test]
fn unparsable_numbers_are_errors() {
    let mut vars = REQUIRED.to_vec();
    vars.push(("GOALCHAT_TEMPERATURE", "warm"));
    assert!(GatewayConfig::from_lookup(lookup(&vars)).is_err());
}
