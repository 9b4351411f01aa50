use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The fixed set of storage folders the dashboard uploads into. Each
/// content form targets exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UploadFolder {
    #[serde(rename = "profile")]
    Profile,
    #[serde(rename = "projects")]
    Projects,
    #[serde(rename = "projects/additional")]
    ProjectsAdditional,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "skills/icons")]
    SkillIcons,
}

impl UploadFolder {
    pub fn prefix(&self) -> &'static str {
        match self {
            UploadFolder::Profile => "profile",
            UploadFolder::Projects => "projects",
            UploadFolder::ProjectsAdditional => "projects/additional",
            UploadFolder::Education => "education",
            UploadFolder::SkillIcons => "skills/icons",
        }
    }
}

/// Object key for an upload. The millisecond timestamp namespaces the
/// original filename so repeat uploads never collide.
pub fn object_name(folder: UploadFolder, filename: &str, timestamp_millis: i64) -> String {
    format!("{}/{}_{}", folder.prefix(), timestamp_millis, filename)
}

/// What the dashboard needs to perform a direct-to-storage upload:
/// a short-lived signed PUT URL plus the stable public URL the
/// uploaded object will be reachable at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicket {
    pub upload_url: String,
    pub public_url: String,
    pub object_name: String,
}
