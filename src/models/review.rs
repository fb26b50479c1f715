// src/models/review.rs
use serde::{Deserialize, Serialize};

/// In-progress form state held by the review generator component.
/// Ratings start at 0 (= unset); the draft is only submittable once all
/// three are set and the comment is non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub service: u8,           // Star rating for staff service (1-5, 0 = unset)
    pub skill: u8,             // Star rating for technique/finish (1-5, 0 = unset)
    pub atmosphere: u8,        // Star rating for the salon's ambience (1-5, 0 = unset)
    pub comment: String,       // What the customer liked most
    pub hotpepper_url: String, // Optional HotPepper Beauty review URL, client-only
}

impl ReviewDraft {
    pub fn is_submittable(&self) -> bool {
        self.service > 0
            && self.skill > 0
            && self.atmosphere > 0
            && !self.comment.trim().is_empty()
    }

    pub fn to_request(&self) -> ReviewRequest {
        ReviewRequest {
            service: self.service.into(),
            skill: self.skill.into(),
            atmosphere: self.atmosphere.into(),
            comment: self.comment.clone(),
            hotpepper_url: self.hotpepper_url.clone(),
        }
    }
}

/// Wire payload for POST /api/generate-review. Every field defaults so a
/// missing field deserializes as 0/"" and is rejected by the handler's own
/// validation instead of a parse error. Ratings are wide integers on the
/// wire: the service only checks truthiness, so any non-zero value must
/// survive deserialization even though the UI can only produce 1-5.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReviewRequest {
    #[serde(default)]
    pub service: i64,
    #[serde(default)]
    pub skill: i64,
    #[serde(default)]
    pub atmosphere: i64,
    #[serde(default)]
    pub comment: String,
    // Carried by the client, ignored by the server.
    #[serde(default, rename = "hotpepperUrl")]
    pub hotpepper_url: String,
}

impl ReviewRequest {
    /// Presence/truthiness check only: the service deliberately does not
    /// enforce the 1-5 range (any non-zero rating passes).
    pub fn has_required_fields(&self) -> bool {
        self.service != 0 && self.skill != 0 && self.atmosphere != 0 && !self.comment.is_empty()
    }
}

/// Success body: the generated review, already trimmed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GeneratedReview {
    pub review: String,
}

/// Error body shared by all failure responses.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            details: Some(details.into()),
        }
    }
}
