//! Request and response bodies for the showcases HTTP API.

use core_types::{Action, DeliveryReceipt, MailDraft, ProjectCard};
use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}

/// Project entry as listed by `GET /api/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub logo_url: String,
    pub background_color: String,
    pub action: Action,
    /// Documentation link, when the card links out.
    pub documentation_url: Option<String>,
}

impl From<&ProjectCard> for ProjectSummary {
    fn from(card: &ProjectCard) -> Self {
        Self {
            slug: card.slug.to_string(),
            title: card.title.clone(),
            description: card.description.clone(),
            logo_url: card.logo_url.clone(),
            background_color: card.background_color.clone(),
            action: card.action.clone(),
            documentation_url: card.documentation_url().map(str::to_string),
        }
    }
}

/// Body of `POST /api/mail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMailRequest {
    pub recipients: Vec<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<SendMailRequest> for MailDraft {
    fn from(req: SendMailRequest) -> Self {
        Self {
            recipients: req.recipients,
            subject: req.subject,
            message: req.message,
        }
    }
}

/// Successful response of `POST /api/mail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMailResponse {
    pub mail: MailDraft,
    pub receipt: DeliveryReceipt,
}
