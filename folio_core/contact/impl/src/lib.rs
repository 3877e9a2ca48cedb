use std::sync::Arc;

use anyhow::Context;
use folio_core_contact_contracts::{ContactPrepareSubmissionError, ContactService};
use folio_models::{
    contact::{ContactOutcome, ContactRequest, ContactRequestDraft, ContactSubmission},
    email_address::EmailAddress,
};
use url::Url;

/// Gmail compose endpoint. `view=cm` opens the compose view, `fs=1` in
/// fullscreen.
const GMAIL_COMPOSE_ENDPOINT: &str = "https://mail.google.com/mail/";

const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone)]
pub struct ContactServiceImpl {
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub recipient: Arc<EmailAddress>,
}

impl ContactServiceImpl {
    pub fn new(config: ContactServiceConfig) -> Self {
        Self { config }
    }
}

impl ContactService for ContactServiceImpl {
    async fn prepare_submission(
        &self,
        draft: ContactRequestDraft,
    ) -> Result<ContactSubmission, ContactPrepareSubmissionError> {
        let request = draft
            .validate()
            .map_err(ContactPrepareSubmissionError::Rejected)?;

        let subject = format_subject(&request);
        let body = format_body(&request);
        let compose_url = compose_url(&self.config.recipient, &subject, &body)?;

        Ok(ContactSubmission {
            outcome: ContactOutcome::RequiresManualSend,
            subject,
            body,
            compose_url,
        })
    }
}

pub fn format_subject(request: &ContactRequest) -> String {
    format!(
        "Portfolio Contact: {} - {}",
        *request.project_type, *request.name
    )
}

pub fn format_body(request: &ContactRequest) -> String {
    format!(
        "Name: {}\nEmail: {}\nCompany: {}\nProject Type: {}\nBudget: {}\nTimeline: {}\n\nMessage:\n{}",
        *request.name,
        request.email,
        request
            .company
            .as_deref()
            .map(String::as_str)
            .unwrap_or(NOT_SPECIFIED),
        *request.project_type,
        request
            .budget
            .as_deref()
            .map(String::as_str)
            .unwrap_or(NOT_SPECIFIED),
        request
            .timeline
            .as_deref()
            .map(String::as_str)
            .unwrap_or(NOT_SPECIFIED),
        *request.message,
    )
}

pub fn compose_url(
    recipient: &EmailAddress,
    subject: &str,
    body: &str,
) -> anyhow::Result<Url> {
    let mut url =
        Url::parse(GMAIL_COMPOSE_ENDPOINT).context("Failed to parse gmail compose endpoint")?;
    url.query_pairs_mut()
        .append_pair("view", "cm")
        .append_pair("fs", "1")
        .append_pair("to", recipient.as_str())
        .append_pair("su", subject)
        .append_pair("body", body);
    Ok(url)
}
