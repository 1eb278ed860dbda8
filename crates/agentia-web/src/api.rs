//! API Client
//!
//! Browser-side implementations of the core transport traits. Each is built
//! once by the component that owns the matching form and cloned into every
//! request task; clones share one `reqwest::Client`.

use agentia_core::{
    AgentiaError, ChatMessage, ChatRequest, ChatTransport, ContactBackend, ContactForm, Result,
    contact::FORM_ENDPOINT,
};
use async_trait::async_trait;

/// Path of the chat proxy on the serving origin
pub const CHAT_PATH: &str = "/api/chat";

/// Absolute URL on the page's own origin (reqwest needs a base in WASM)
fn same_origin(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());
    format!("{origin}{path}")
}

fn transport_error(e: &reqwest::Error) -> AgentiaError {
    AgentiaError::Transport(e.to_string())
}

/// Posts the widget history to `/api/chat`
#[derive(Clone, Debug, Default)]
pub struct HttpChatTransport {
    client: reqwest::Client,
}

impl HttpChatTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: ChatRequest) -> Result<ChatMessage> {
        let response = self
            .client
            .post(same_origin(CHAT_PATH))
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentiaError::UpstreamStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json::<ChatMessage>()
            .await
            .map_err(|e| AgentiaError::MalformedResponse(e.to_string()))
    }
}

/// Posts the contact form to the hosted form backend
#[derive(Clone, Debug)]
pub struct FormspreeBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for FormspreeBackend {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: FORM_ENDPOINT.into(),
        }
    }
}

impl FormspreeBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl ContactBackend for FormspreeBackend {
    async fn submit(&self, form: &ContactForm) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(form)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AgentiaError::UpstreamStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_backend_targets_hosted_endpoint() {
        let backend = FormspreeBackend::new();
        assert_eq!(backend.endpoint, FORM_ENDPOINT);
        assert_eq!(backend.clone().endpoint, FORM_ENDPOINT);
    }
}
