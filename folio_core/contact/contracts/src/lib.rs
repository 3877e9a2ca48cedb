use std::future::Future;

use folio_models::contact::{ContactRequestDraft, ContactSubmission, ContactValidationErrors};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validates a contact request draft and prepares the formatted
    /// submission the visitor completes from their own mail client.
    fn prepare_submission(
        &self,
        draft: ContactRequestDraft,
    ) -> impl Future<Output = Result<ContactSubmission, ContactPrepareSubmissionError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactPrepareSubmissionError {
    #[error("Contact request failed validation.")]
    Rejected(ContactValidationErrors),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_prepare_submission(
        mut self,
        draft: ContactRequestDraft,
        result: Result<ContactSubmission, ContactPrepareSubmissionError>,
    ) -> Self {
        self.expect_prepare_submission()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
