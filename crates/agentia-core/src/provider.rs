//! Text Generation Provider
//!
//! The proxy talks to its hosted model exclusively through [`TextGenerator`],
//! so the server can be wired to any backend (or a stub in tests) at start-up.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agentia_core::provider::{GenerationOptions, TextGenerator};
//!
//! let generator = HuggingFaceGenerator::from_config(HuggingFaceConfig::default());
//! let text = generator.generate("Hello", &GenerationOptions::default()).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Generation budget sent with every prompt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Upper bound on newly generated tokens
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    /// Whether the upstream should echo the prompt before the completion
    #[serde(default)]
    pub return_full_text: bool,
}

const fn default_max_new_tokens() -> u32 {
    50
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            return_full_text: false,
        }
    }
}

/// Provider metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorInfo {
    /// Provider name (e.g., "Hugging Face")
    pub name: String,

    /// Model endpoint or identifier
    pub model: String,
}

/// Strategy trait for hosted text-generation backends
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider information
    fn info(&self) -> GeneratorInfo;

    /// Generate a completion for a single prompt.
    ///
    /// Implementations return [`crate::AgentiaError::EmptyCompletion`] when the
    /// upstream answers without text, so callers can tell it apart from a
    /// transport or upstream failure.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.max_new_tokens, 50);
        assert!(!opts.return_full_text);
    }

    #[test]
    fn test_generation_options_wire_format() {
        let json = serde_json::to_value(GenerationOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"max_new_tokens": 50, "return_full_text": false})
        );
    }
}
