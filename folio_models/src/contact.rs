use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::email_address::EmailAddress;

/// Project types advertised to clients. Submissions are not checked against
/// this list, any non-empty project type is accepted.
pub const PROJECT_TYPES: [&str; 7] = [
    "Web Application",
    "Real-time Platform",
    "E-commerce Site",
    "Portfolio/Landing Page",
    "API Development",
    "Database Design",
    "Other",
];

pub const BUDGET_RANGES: [&str; 6] = [
    "Under $1,000",
    "$1,000 - $5,000",
    "$5,000 - $10,000",
    "$10,000 - $25,000",
    "$25,000+",
    "Let's discuss",
];

pub const TIMELINES: [&str; 6] = [
    "ASAP",
    "Within 1 month",
    "1-3 months",
    "3-6 months",
    "6+ months",
    "Flexible",
];

/// A validated contact request. Constructed via
/// [`ContactRequestDraft::validate`], never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: ContactName,
    pub email: EmailAddress,
    pub company: Option<CompanyName>,
    pub project_type: ProjectType,
    pub budget: Option<BudgetRange>,
    pub timeline: Option<ProjectTimeline>,
    pub message: ContactMessageText,
}

#[nutype(
    validate(len_char_min = 2, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(len_char_min = 1, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ProjectType(String);

#[nutype(
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct CompanyName(String);

#[nutype(
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct BudgetRange(String);

#[nutype(
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ProjectTimeline(String);

#[nutype(
    validate(len_char_min = 10, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageText(String);

/// Raw candidate contact request, exactly as submitted. Optional fields that
/// are absent or empty are normalized to `None` during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequestDraft {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: String,
}

impl ContactRequestDraft {
    /// Checks the draft against the contact request invariants.
    ///
    /// All violations are collected in one pass and reported per field in
    /// submission order.
    pub fn validate(self) -> Result<ContactRequest, ContactValidationErrors> {
        let mut violations = Vec::new();

        let name = ContactName::try_from(self.name)
            .map_err(|err| violations.push(name_violation(err)))
            .ok();
        let email = self
            .email
            .parse::<EmailAddress>()
            .map_err(|_| violations.push(email_violation()))
            .ok();
        let company = match self.company.filter(|value| !value.is_empty()) {
            Some(value) => match CompanyName::try_from(value) {
                Ok(company) => Some(company),
                Err(err) => {
                    violations.push(company_violation(err));
                    None
                }
            },
            None => None,
        };
        let project_type = ProjectType::try_from(self.project_type)
            .map_err(|err| violations.push(project_type_violation(err)))
            .ok();
        let budget = match self.budget.filter(|value| !value.is_empty()) {
            Some(value) => match BudgetRange::try_from(value) {
                Ok(budget) => Some(budget),
                Err(err) => {
                    violations.push(budget_violation(err));
                    None
                }
            },
            None => None,
        };
        let timeline = match self.timeline.filter(|value| !value.is_empty()) {
            Some(value) => match ProjectTimeline::try_from(value) {
                Ok(timeline) => Some(timeline),
                Err(err) => {
                    violations.push(timeline_violation(err));
                    None
                }
            },
            None => None,
        };
        let message = ContactMessageText::try_from(self.message)
            .map_err(|err| violations.push(message_violation(err)))
            .ok();

        match (name, email, project_type, message) {
            (Some(name), Some(email), Some(project_type), Some(message))
                if violations.is_empty() =>
            {
                Ok(ContactRequest {
                    name,
                    email,
                    company,
                    project_type,
                    budget,
                    timeline,
                    message,
                })
            }
            _ => Err(ContactValidationErrors { violations }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Contact request failed validation.")]
pub struct ContactValidationErrors {
    pub violations: Vec<FieldViolation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: ContactField,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Company,
    ProjectType,
    Budget,
    Timeline,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::ProjectType => "projectType",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn name_violation(err: ContactNameError) -> FieldViolation {
    let message = match err {
        ContactNameError::LenCharMinViolated => "Name must be at least 2 characters",
        ContactNameError::LenCharMaxViolated => "Name must be at most 256 characters",
    };
    FieldViolation {
        field: ContactField::Name,
        message,
    }
}

fn email_violation() -> FieldViolation {
    FieldViolation {
        field: ContactField::Email,
        message: "Please enter a valid email address",
    }
}

fn company_violation(err: CompanyNameError) -> FieldViolation {
    let message = match err {
        CompanyNameError::LenCharMaxViolated => "Company must be at most 256 characters",
    };
    FieldViolation {
        field: ContactField::Company,
        message,
    }
}

fn project_type_violation(err: ProjectTypeError) -> FieldViolation {
    let message = match err {
        ProjectTypeError::LenCharMinViolated => "Please select a project type",
        ProjectTypeError::LenCharMaxViolated => "Project type must be at most 256 characters",
    };
    FieldViolation {
        field: ContactField::ProjectType,
        message,
    }
}

fn budget_violation(err: BudgetRangeError) -> FieldViolation {
    let message = match err {
        BudgetRangeError::LenCharMaxViolated => "Budget must be at most 256 characters",
    };
    FieldViolation {
        field: ContactField::Budget,
        message,
    }
}

fn timeline_violation(err: ProjectTimelineError) -> FieldViolation {
    let message = match err {
        ProjectTimelineError::LenCharMaxViolated => "Timeline must be at most 256 characters",
    };
    FieldViolation {
        field: ContactField::Timeline,
        message,
    }
}

fn message_violation(err: ContactMessageTextError) -> FieldViolation {
    let message = match err {
        ContactMessageTextError::LenCharMinViolated => "Message must be at least 10 characters",
        ContactMessageTextError::LenCharMaxViolated => "Message must be at most 4096 characters",
    };
    FieldViolation {
        field: ContactField::Message,
        message,
    }
}

/// What happened to a contact submission.
///
/// Replaces the frontend's historical `success: false` sentinel, which
/// conflated "not sent automatically" with failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactOutcome {
    /// A transport accepted the message. No transport exists today; the
    /// variant documents the contract for one.
    Delivered,
    /// A composition link was produced and the caller must open it to
    /// complete delivery.
    RequiresManualSend,
    /// The request failed validation.
    Rejected,
}

/// A formatted contact submission, ready to be completed by the visitor's
/// own mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub outcome: ContactOutcome,
    pub subject: String,
    pub body: String,
    pub compose_url: Url,
}
