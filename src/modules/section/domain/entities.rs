use serde::{Deserialize, Serialize};

/// Per-section visibility flag for the public site. Independent of
/// whether the section's content collection has any rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionData {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(flatten)]
    pub data: SectionData,
}

/// Display name for a section key. Unknown keys get their first
/// letter capitalized so a new section still renders with a label.
pub fn section_name(section_id: &str) -> String {
    match section_id {
        "profile" => "Profile".to_string(),
        "projects" => "Projects".to_string(),
        "skills" => "Skills".to_string(),
        "experience" => "Experience".to_string(),
        "education" => "Education".to_string(),
        "interests" => "Interests".to_string(),
        "contact" => "Contact".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}
