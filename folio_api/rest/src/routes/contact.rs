use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactPrepareSubmissionError, ContactService};

use super::internal_server_error;
use crate::models::contact::{
    ApiContactOptions, ApiContactRequest, ApiContactSubmission, ApiRejectedSubmission,
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .route("/api/contact/options", routing::get(options))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactService>>,
    payload: Result<Json<ApiContactRequest>, JsonRejection>,
) -> Response {
    // An unparseable body is the one hard error of this API; schema
    // violations inside a parseable object are reported as data.
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return internal_server_error(rejection),
    };

    match service.prepare_submission(request.into()).await {
        Ok(submission) => Json(ApiContactSubmission::from(submission)).into_response(),
        Err(ContactPrepareSubmissionError::Rejected(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiRejectedSubmission::from(errors)),
        )
            .into_response(),
        Err(ContactPrepareSubmissionError::Other(err)) => internal_server_error(err),
    }
}

async fn options() -> Response {
    Json(ApiContactOptions::current()).into_response()
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use folio_core_contact_contracts::MockContactService;
    use folio_models::contact::{
        ContactField, ContactOutcome, ContactSubmission, ContactValidationErrors, FieldViolation,
    };

    use super::*;

    fn request() -> ApiContactRequest {
        ApiContactRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: None,
            project_type: "Web Application".into(),
            budget: None,
            timeline: None,
            message: "I need a new website built.".into(),
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            outcome: ContactOutcome::RequiresManualSend,
            subject: "Portfolio Contact: Web Application - Jane Doe".into(),
            body: "Name: Jane Doe".into(),
            compose_url: "https://mail.google.com/mail/?view=cm&fs=1"
                .parse::<url::Url>()
                .unwrap(),
        }
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn submit_ok() {
        // Arrange
        let service =
            MockContactService::new().with_prepare_submission(request().into(), Ok(submission()));

        // Act
        let response = submit(State(Arc::new(service)), Ok(Json(request()))).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["outcome"], "requires_manual_send");
        assert_eq!(body["message"], "Opening Gmail with your message");
        assert_eq!(body["gmailUrl"], "https://mail.google.com/mail/?view=cm&fs=1");
    }

    #[tokio::test]
    async fn submit_rejected() {
        // Arrange
        let service = MockContactService::new().with_prepare_submission(
            request().into(),
            Err(ContactPrepareSubmissionError::Rejected(
                ContactValidationErrors {
                    violations: vec![FieldViolation {
                        field: ContactField::Email,
                        message: "Please enter a valid email address",
                    }],
                },
            )),
        );

        // Act
        let response = submit(State(Arc::new(service)), Ok(Json(request()))).await;

        // Assert
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["outcome"], "rejected");
        assert_eq!(body["violations"][0]["field"], "email");
    }

    #[tokio::test]
    async fn submit_internal_error() {
        // Arrange
        let service = MockContactService::new().with_prepare_submission(
            request().into(),
            Err(ContactPrepareSubmissionError::Other(anyhow!("boom"))),
        );

        // Act
        let response = submit(State(Arc::new(service)), Ok(Json(request()))).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["detail"], "Internal server error");
    }

    #[tokio::test]
    async fn options_lists_choices() {
        // Act
        let response = options().await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["projectTypes"][0], "Web Application");
        assert_eq!(body["budgetRanges"][0], "Under $1,000");
        assert_eq!(body["timelines"][5], "Flexible");
    }
}
