//! Contact Form
//!
//! Field state and submission lifecycle for the "Get in Touch" form. The form
//! is posted straight to a hosted form backend through [`ContactBackend`].

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;

/// Hosted form-processing endpoint
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mqaeykdb";

/// How long the success/error banner stays up
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(3);

pub const SUCCESS_TEXT: &str = "Message sent successfully!";
pub const ERROR_TEXT: &str = "Something went wrong. Please try again.";

/// The four form fields, serialized as-is for the backend
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Identifies one input of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }

    /// HTML input type
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Subject => write!(f, "subject"),
            Self::Message => write!(f, "message"),
        }
    }
}

/// Client-side validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field.")]
    MissingField(ContactField),

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("A submission is already in progress.")]
    Busy,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Every field is required; the email must look like `local@domain`.
    pub fn validate(&self) -> std::result::Result<(), ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Hosted form backend.
///
/// Any 2xx counts as accepted; everything else is an error.
#[async_trait(?Send)]
pub trait ContactBackend {
    async fn submit(&self, form: &ContactForm) -> Result<()>;
}

/// Banner / button state of the form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub const fn banner_text(self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_TEXT),
            Self::Error => Some(ERROR_TEXT),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// Handle for dismissing the banner raised by one particular submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTicket(u64);

/// Form fields together with the submission status
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    status: SubmitStatus,
    submissions: u64,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn status(&self) -> SubmitStatus {
        self.status
    }

    /// The submit button is disabled only while a request is in flight
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Validate and move to `Submitting`, returning the payload to post.
    pub fn begin_submit(&mut self) -> std::result::Result<ContactForm, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::Busy);
        }
        self.form.validate()?;
        self.status = SubmitStatus::Submitting;
        self.submissions += 1;
        Ok(self.form.clone())
    }

    /// Record the backend's answer; clears the fields on success.
    pub fn finish_submit(&mut self, outcome: Result<()>) -> BannerTicket {
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.form = ContactForm::default();
            }
            Err(e) => {
                tracing::warn!("Contact form submission failed: {}", e);
                self.status = SubmitStatus::Error;
            }
        }
        BannerTicket(self.submissions)
    }

    /// Drop the banner if it still belongs to `ticket`'s submission.
    pub fn dismiss_banner(&mut self, ticket: BannerTicket) {
        let current = ticket.0 == self.submissions;
        if current && matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::AgentiaError;

    struct StubBackend {
        accept: bool,
        calls: Cell<usize>,
    }

    impl StubBackend {
        fn new(accept: bool) -> Self {
            Self {
                accept,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactBackend for StubBackend {
        async fn submit(&self, _form: &ContactForm) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            if self.accept {
                Ok(())
            } else {
                Err(AgentiaError::UpstreamStatus {
                    status: 422,
                    body: "{}".into(),
                })
            }
        }
    }

    /// Validate, post and record, the way the contact section drives it
    async fn submit_through(
        state: &mut ContactFormState,
        backend: &StubBackend,
    ) -> std::result::Result<BannerTicket, ContactError> {
        let payload = state.begin_submit()?;
        let outcome = backend.submit(&payload).await;
        Ok(state.finish_submit(outcome))
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.form.set(ContactField::Name, "Ada");
        state.form.set(ContactField::Email, "ada@example.com");
        state.form.set(ContactField::Subject, "Agents");
        state.form.set(ContactField::Message, "Tell me more.");
        state
    }

    #[test]
    fn test_form_serializes_four_fields() {
        let json = serde_json::to_value(filled().form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Agents",
                "message": "Tell me more.",
            })
        );
    }

    #[test]
    fn test_missing_field_blocks_submit() {
        let mut state = filled();
        state.form.set(ContactField::Subject, "  ");
        assert_eq!(
            state.begin_submit(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
        assert_eq!(state.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_email_shape_checked() {
        let mut state = filled();
        state.form.set(ContactField::Email, "ada.example.com");
        assert_eq!(state.begin_submit(), Err(ContactError::InvalidEmail));

        state.form.set(ContactField::Email, "ada@");
        assert_eq!(state.begin_submit(), Err(ContactError::InvalidEmail));
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_shows_banner() {
        let backend = StubBackend::new(true);
        let mut state = filled();

        let ticket = submit_through(&mut state, &backend).await.unwrap();

        assert_eq!(backend.calls.get(), 1);
        assert!(state.form.is_empty());
        assert_eq!(state.status(), SubmitStatus::Success);
        assert_eq!(state.status().banner_text(), Some(SUCCESS_TEXT));
        assert!(!state.is_submitting());

        state.dismiss_banner(ticket);
        assert_eq!(state.status(), SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_rejection_keeps_fields() {
        let backend = StubBackend::new(false);
        let mut state = filled();

        submit_through(&mut state, &backend).await.unwrap();

        assert_eq!(state.status(), SubmitStatus::Error);
        assert_eq!(state.form.name, "Ada");
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn test_stale_ticket_leaves_newer_banner() {
        let backend = StubBackend::new(false);
        let mut state = filled();

        let first = submit_through(&mut state, &backend).await.unwrap();
        let _second = submit_through(&mut state, &backend).await.unwrap();
        state.dismiss_banner(first);

        assert_eq!(state.status(), SubmitStatus::Error);
    }

    #[test]
    fn test_double_submit_is_busy() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit(), Err(ContactError::Busy));
    }
}
