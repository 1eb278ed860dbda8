//! Hugging Face Text Generation
//!
//! Implementation of `TextGenerator` for the serverless Inference API.
//! One POST per prompt, no streaming, no retries.

use agentia_core::{
    error::{AgentiaError, Result},
    provider::{GenerationOptions, GeneratorInfo, TextGenerator},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL_URL: &str = "https://api-inference.huggingface.co/models/gpt2";

/// Hugging Face provider configuration
#[derive(Clone, Debug)]
pub struct HuggingFaceConfig {
    /// Full model endpoint URL
    pub model_url: String,

    /// Bearer token; requests are sent unauthenticated without one
    pub access_token: Option<String>,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            model_url: DEFAULT_MODEL_URL.into(),
            access_token: None,
        }
    }
}

impl HuggingFaceConfig {
    /// Read `HF_MODEL_URL` and `HF_ACCESS_TOKEN` through `lookup`; a blank
    /// token counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            model_url: lookup("HF_MODEL_URL").unwrap_or(defaults.model_url),
            access_token: lookup("HF_ACCESS_TOKEN").filter(|t| !t.trim().is_empty()),
        }
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationOptions,
}

#[derive(Deserialize)]
struct Generated {
    #[serde(default)]
    generated_text: Option<String>,
}

/// Hugging Face Inference API provider
pub struct HuggingFaceGenerator {
    client: reqwest::Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceGenerator {
    /// Create from configuration
    pub fn from_config(config: HuggingFaceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Interpret an upstream answer.
    ///
    /// 2xx bodies are either `[{"generated_text": ...}]` or `{"error": ...}`.
    fn parse_response(status: u16, body: &str) -> Result<String> {
        if !(200..300).contains(&status) {
            return Err(AgentiaError::UpstreamStatus {
                status,
                body: body.to_string(),
            });
        }

        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| AgentiaError::MalformedResponse(e.to_string()))?;

        if let Some(error) = value.get("error") {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), str::to_string);
            return Err(AgentiaError::Upstream(message));
        }

        let generations: Vec<Generated> = serde_json::from_value(value)
            .map_err(|e| AgentiaError::MalformedResponse(e.to_string()))?;

        generations
            .into_iter()
            .next()
            .and_then(|g| g.generated_text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AgentiaError::EmptyCompletion)
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            name: "Hugging Face".into(),
            model: self.config.model_url.clone(),
        }
    }

    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let mut request = self.client.post(&self.config.model_url).json(&InferenceRequest {
            inputs: prompt,
            parameters: options,
        });
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AgentiaError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AgentiaError::Transport(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "Hugging Face responded");
        Self::parse_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};

    use super::*;

    #[test]
    fn test_config_from_lookup() {
        let config = HuggingFaceConfig::from_lookup(|key| match key {
            "HF_ACCESS_TOKEN" => Some("hf_secret".into()),
            _ => None,
        });
        assert_eq!(config.model_url, DEFAULT_MODEL_URL);
        assert_eq!(config.access_token.as_deref(), Some("hf_secret"));
    }

    #[test]
    fn test_blank_token_counts_as_unset() {
        let config = HuggingFaceConfig::from_lookup(|key| {
            (key == "HF_ACCESS_TOKEN").then(|| "  ".to_string())
        });
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config = HuggingFaceConfig::default();
        assert_eq!(config.model_url, DEFAULT_MODEL_URL);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_parse_generated_text() {
        let text = HuggingFaceGenerator::parse_response(200, r#"[{"generated_text": "Hello"}]"#);
        assert_eq!(text.unwrap(), "Hello");
    }

    #[test]
    fn test_parse_error_body() {
        let err = HuggingFaceGenerator::parse_response(
            200,
            r#"{"error": "Model gpt2 is currently loading"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AgentiaError::Upstream(msg) if msg.contains("loading")));
    }

    #[test]
    fn test_parse_non_success_status() {
        let err = HuggingFaceGenerator::parse_response(503, r#"{"error": "busy"}"#).unwrap_err();
        assert!(matches!(err, AgentiaError::UpstreamStatus { status: 503, .. }));
    }

    #[test]
    fn test_parse_empty_completion() {
        for body in ["[]", r#"[{"generated_text": ""}]"#, r"[{}]"] {
            let err = HuggingFaceGenerator::parse_response(200, body).unwrap_err();
            assert!(matches!(err, AgentiaError::EmptyCompletion), "body {body}");
        }
    }

    #[test]
    fn test_parse_malformed() {
        let err = HuggingFaceGenerator::parse_response(200, "<html>").unwrap_err();
        assert!(matches!(err, AgentiaError::MalformedResponse(_)));
    }

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/models/gpt2")
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_budget_and_token() {
        let captured: Arc<Mutex<Option<(Option<String>, serde_json::Value)>>> =
            Arc::new(Mutex::new(None));
        let sink = captured.clone();

        let router = Router::new().route(
            "/models/gpt2",
            post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let sink = sink.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *sink.lock().unwrap() = Some((auth, body));
                    Json(serde_json::json!([{"generated_text": " Hi there"}]))
                }
            }),
        );
        let url = spawn_upstream(router).await;

        let generator = HuggingFaceGenerator::from_config(HuggingFaceConfig {
            model_url: url,
            access_token: Some("hf_test".into()),
        });
        let text = generator
            .generate("Hello", &GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(text, " Hi there");

        let (auth, body) = captured.lock().unwrap().take().unwrap();
        assert_eq!(auth.as_deref(), Some("Bearer hf_test"));
        assert_eq!(
            body,
            serde_json::json!({
                "inputs": "Hello",
                "parameters": {"max_new_tokens": 50, "return_full_text": false},
            })
        );
    }

    #[tokio::test]
    async fn test_generate_surfaces_upstream_status() {
        let router = Router::new().route(
            "/models/gpt2",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(serde_json::json!({"error": "Model is loading"})),
                )
            }),
        );
        let url = spawn_upstream(router).await;

        let generator = HuggingFaceGenerator::from_config(HuggingFaceConfig {
            model_url: url,
            access_token: None,
        });
        let err = generator
            .generate("Hello", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AgentiaError::UpstreamStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_generate_transport_failure() {
        let generator = HuggingFaceGenerator::from_config(HuggingFaceConfig {
            model_url: "http://127.0.0.1:9/models/gpt2".into(),
            access_token: None,
        });
        let err = generator
            .generate("Hello", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AgentiaError::Transport(_)));
    }
}
