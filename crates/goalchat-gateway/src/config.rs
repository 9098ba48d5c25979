use std::env;

use goalchat_llm::azure::AzureConfig;
use goalchat_llm::params::{DEFAULT_MAX_COMPLETION_TOKENS, DEFAULT_TEMPERATURE, GenerationParams};

const DEFAULT_DEPLOYMENT: &str = "ispai-test-gpt4o";
const DEFAULT_API_VERSION: &str = "2024-04-01-preview";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Gateway settings, read once at start-up.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind: String,
    pub azure: AzureConfig,
}

impl GatewayConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| {
            var(name).ok_or_else(|| eyre::eyre!("missing required environment variable {name}"))
        };

        let endpoint = required("AZURE_OPENAI_ENDPOINT")?;
        let api_key = required("AZURE_OPEN_AI_KEY")?;
        let deployment =
            var("AZURE_OPENAI_DEPLOYMENT").unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string());
        let api_version =
            var("AZURE_OPENAI_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let model = var("GOALCHAT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match var("GOALCHAT_TEMPERATURE") {
            Some(v) => v
                .parse::<f32>()
                .map_err(|e| eyre::eyre!("invalid GOALCHAT_TEMPERATURE {v:?}: {e}"))?,
            None => DEFAULT_TEMPERATURE,
        };
        let max_tokens = match var("GOALCHAT_MAX_TOKENS") {
            Some(v) => v
                .parse::<u32>()
                .map_err(|e| eyre::eyre!("invalid GOALCHAT_MAX_TOKENS {v:?}: {e}"))?,
            None => DEFAULT_MAX_COMPLETION_TOKENS,
        };

        let params = GenerationParams::for_model(&model, temperature, max_tokens);
        let bind = var("GOALCHAT_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(Self {
            bind,
            azure: AzureConfig {
                endpoint,
                api_key,
                deployment,
                api_version,
                model,
                params,
            },
        })
    }
}
