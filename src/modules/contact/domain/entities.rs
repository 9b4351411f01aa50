use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the public contact form submits.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct ContactForm {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Freelance inquiry")]
    pub subject: String,
    #[schema(example = "Hi, I'd like to talk about a project.")]
    pub message: String,
}

/// The stored message. `created_at` and `read` are server-set at
/// submission time; there is no read or update path for messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    #[serde(flatten)]
    pub data: ContactMessageData,
}
