//! Server Configuration
//!
//! Read once from the environment (after `.env` is loaded) and handed to
//! whatever needs it; nothing reads the environment after start-up.

use std::path::PathBuf;

use agentia_core::{AgentiaError, GenerationOptions, Result};
use agentia_runtime::HuggingFaceConfig;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// Directory holding the built frontend
    pub static_dir: PathBuf,

    /// Budget sent with every proxied prompt
    pub generation: GenerationOptions,

    pub huggingface: HuggingFaceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("static"),
            generation: GenerationOptions::default(),
            huggingface: HuggingFaceConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let max_new_tokens = match lookup("HF_MAX_NEW_TOKENS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                AgentiaError::Config(format!("HF_MAX_NEW_TOKENS={raw:?}: {e}"))
            })?,
            None => defaults.generation.max_new_tokens,
        };

        let huggingface = HuggingFaceConfig::from_lookup(&lookup);

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            generation: GenerationOptions {
                max_new_tokens,
                ..defaults.generation
            },
            huggingface,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.generation.max_new_tokens, 50);
        assert!(config.huggingface.access_token.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("HF_ACCESS_TOKEN", "hf_abc"),
            ("HF_MAX_NEW_TOKENS", "80"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.huggingface.access_token.as_deref(), Some("hf_abc"));
        assert_eq!(config.generation.max_new_tokens, 80);
        assert!(!config.generation.return_full_text);
    }

    #[test]
    fn test_model_settings_come_from_huggingface_config() {
        let pairs = [
            ("HF_MODEL_URL", "http://127.0.0.1:9000/models/tiny"),
            ("HF_ACCESS_TOKEN", "   "),
        ];
        let config = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap();
        let direct = HuggingFaceConfig::from_lookup(lookup_from(&pairs));

        assert_eq!(config.huggingface.model_url, direct.model_url);
        assert_eq!(config.huggingface.model_url, "http://127.0.0.1:9000/models/tiny");
        assert!(config.huggingface.access_token.is_none());
        assert!(direct.access_token.is_none());
    }

    #[test]
    fn test_bad_token_budget_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("HF_MAX_NEW_TOKENS", "lots")])).unwrap_err();
        assert!(matches!(err, AgentiaError::Config(_)));
    }
}
