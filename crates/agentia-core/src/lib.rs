//! # agentia-core
//!
//! Domain logic for the Agentia World site, shared by the server and the
//! WASM frontend.
//!
//! ## Architecture
//!
//! ```text
//!   agentia-web (browser)                  agentia-server (axum)
//!  ┌─────────────┐   POST /api/chat      ┌───────────────────┐
//!  │ ChatSession │ ───────────────────▶  │ proxy::relay_chat │
//!  └─────────────┘   (ChatTransport)     └─────────┬─────────┘
//!  ┌─────────────┐                                 │ TextGenerator
//!  │ ContactForm │ ──▶ hosted form backend         ▼
//!  └─────────────┘   (ContactBackend)      hosted model endpoint
//! ```
//!
//! `content` holds the static copy, `ui` the small state machines behind the
//! page's toggles, and `shader` the portal mesh.

pub mod chat;
pub mod contact;
pub mod content;
pub mod error;
pub mod message;
pub mod provider;
pub mod proxy;
pub mod shader;
pub mod ui;

pub use chat::{ChatSession, ChatTransport, TurnRejected};
pub use contact::{ContactBackend, ContactForm, ContactFormState, SubmitStatus};
pub use error::{AgentiaError, Result};
pub use message::{ChatMessage, ChatRequest, Role};
pub use provider::{GenerationOptions, GeneratorInfo, TextGenerator};
