use serde::{Deserialize, Serialize};

/// Project fields as the dashboard submits them; the id is assigned by
/// the backend and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<String>,

    #[serde(default)]
    pub additional_images: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,

    #[serde(flatten)]
    pub data: ProjectData,
}
