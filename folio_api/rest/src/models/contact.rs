use folio_models::contact::{
    ContactField, ContactOutcome, ContactRequestDraft, ContactSubmission, ContactValidationErrors,
    BUDGET_RANGES, PROJECT_TYPES, TIMELINES,
};
use serde::{Deserialize, Serialize};

/// Candidate contact request as submitted by the frontend.
///
/// Every field is optional at the wire level so that any JSON object reaches
/// the validator; missing required fields surface as field violations, not
/// deserialization errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiContactRequest {
    /// Full name of the visitor
    pub name: String,
    /// Email address of the visitor
    pub email: String,
    /// Company the visitor represents
    pub company: Option<String>,
    /// Kind of project the visitor is asking about
    pub project_type: String,
    /// Budget range
    pub budget: Option<String>,
    /// Urgency label
    pub timeline: Option<String>,
    /// The message itself
    pub message: String,
}

impl From<ApiContactRequest> for ContactRequestDraft {
    fn from(value: ApiContactRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            company: value.company,
            project_type: value.project_type,
            budget: value.budget,
            timeline: value.timeline,
            message: value.message,
        }
    }
}

pub const OPENING_GMAIL_DETAIL: &str = "Opening Gmail with your message";
pub const REJECTED_DETAIL: &str = "Contact request failed validation";

#[derive(Debug, Serialize)]
pub struct ApiContactSubmission {
    pub outcome: ContactOutcome,
    pub message: &'static str,
    #[serde(rename = "gmailUrl")]
    pub gmail_url: String,
}

impl From<ContactSubmission> for ApiContactSubmission {
    fn from(value: ContactSubmission) -> Self {
        Self {
            outcome: value.outcome,
            message: OPENING_GMAIL_DETAIL,
            gmail_url: value.compose_url.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiRejectedSubmission {
    pub outcome: ContactOutcome,
    pub detail: &'static str,
    pub violations: Vec<ApiFieldViolation>,
}

#[derive(Debug, Serialize)]
pub struct ApiFieldViolation {
    pub field: ContactField,
    pub message: &'static str,
}

impl From<ContactValidationErrors> for ApiRejectedSubmission {
    fn from(value: ContactValidationErrors) -> Self {
        Self {
            outcome: ContactOutcome::Rejected,
            detail: REJECTED_DETAIL,
            violations: value
                .violations
                .into_iter()
                .map(|violation| ApiFieldViolation {
                    field: violation.field,
                    message: violation.message,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactOptions {
    pub project_types: &'static [&'static str],
    pub budget_ranges: &'static [&'static str],
    pub timelines: &'static [&'static str],
}

impl ApiContactOptions {
    pub fn current() -> Self {
        Self {
            project_types: &PROJECT_TYPES,
            budget_ranges: &BUDGET_RANGES,
            timelines: &TIMELINES,
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_models::contact::FieldViolation;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_accepts_partial_objects() {
        let request: ApiContactRequest = serde_json::from_value(json!({})).unwrap();

        assert_eq!(request.name, "");
        assert_eq!(request.email, "");
        assert_eq!(request.company, None);
        assert_eq!(request.project_type, "");
        assert_eq!(request.message, "");
    }

    #[test]
    fn request_uses_camel_case_keys() {
        let request: ApiContactRequest = serde_json::from_value(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "projectType": "Web Application",
            "message": "I need a new website built.",
        }))
        .unwrap();

        assert_eq!(request.project_type, "Web Application");
    }

    #[test]
    fn submission_wire_shape() {
        let submission = ApiContactSubmission {
            outcome: ContactOutcome::RequiresManualSend,
            message: OPENING_GMAIL_DETAIL,
            gmail_url: "https://mail.google.com/mail/?view=cm".into(),
        };

        assert_eq!(
            serde_json::to_value(submission).unwrap(),
            json!({
                "outcome": "requires_manual_send",
                "message": "Opening Gmail with your message",
                "gmailUrl": "https://mail.google.com/mail/?view=cm",
            })
        );
    }

    #[test]
    fn rejected_wire_shape() {
        let rejected = ApiRejectedSubmission::from(ContactValidationErrors {
            violations: vec![FieldViolation {
                field: ContactField::ProjectType,
                message: "Please select a project type",
            }],
        });

        assert_eq!(
            serde_json::to_value(rejected).unwrap(),
            json!({
                "outcome": "rejected",
                "detail": "Contact request failed validation",
                "violations": [
                    { "field": "projectType", "message": "Please select a project type" },
                ],
            })
        );
    }

    #[test]
    fn options_wire_shape() {
        let options = serde_json::to_value(ApiContactOptions::current()).unwrap();

        assert_eq!(options["projectTypes"][0], "Web Application");
        assert_eq!(options["budgetRanges"][5], "Let's discuss");
        assert_eq!(options["timelines"][0], "ASAP");
    }
}
