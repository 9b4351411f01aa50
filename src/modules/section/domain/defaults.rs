use crate::section::domain::entities::{Section, SectionData};

/// Every page section, visible. Served when the sections table is
/// empty or the store is unreachable.
pub fn default_sections() -> Vec<Section> {
    ["profile", "projects", "skills", "experience", "education", "interests", "contact"]
        .into_iter()
        .map(|id| Section {
            id: id.to_string(),
            data: SectionData {
                name: super::entities::section_name(id),
                visible: true,
            },
        })
        .collect()
}
