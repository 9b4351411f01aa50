use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceData {
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,

    /// `None` means ongoing and sorts as more recent than any date.
    pub end_date: Option<NaiveDate>,

    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,

    #[serde(flatten)]
    pub data: ExperienceData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationData {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: NaiveDate,

    /// `None` means ongoing and sorts as more recent than any date.
    pub end_date: Option<NaiveDate>,

    pub description: String,
    pub location: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,

    #[serde(flatten)]
    pub data: EducationData,
}
