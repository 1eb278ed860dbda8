//! # agentia-runtime
//!
//! Hosted text-generation providers for the chat proxy.
//!
//! ## Providers
//!
//! - **Hugging Face** (default): serverless Inference API text generation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agentia_runtime::{HuggingFaceConfig, HuggingFaceGenerator};
//!
//! let config = HuggingFaceConfig::from_lookup(|key| std::env::var(key).ok());
//! let generator: Arc<dyn TextGenerator> = Arc::new(HuggingFaceGenerator::from_config(config));
//! ```

#[cfg(feature = "huggingface")]
pub mod huggingface;

#[cfg(feature = "huggingface")]
pub use huggingface::{HuggingFaceConfig, HuggingFaceGenerator};

// Re-export core types for convenience
pub use agentia_core::{AgentiaError, GenerationOptions, GeneratorInfo, Result, TextGenerator};
