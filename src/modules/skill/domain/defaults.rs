use crate::skill::domain::entities::{
    Skill, SkillCategory, SkillCategoryData, SkillData,
};

/// Served whenever the backend is unreachable or the collection is empty.
pub fn default_skills() -> Vec<Skill> {
    [
        ("1", "JavaScript", "Frontend"),
        ("2", "React", "Frontend"),
        ("3", "TypeScript", "Frontend"),
        ("4", "Node.js", "Backend"),
        ("5", "Express", "Backend"),
        ("6", "Firebase", "Backend"),
        ("7", "Git", "Tools"),
        ("8", "AWS", "DevOps & Cloud"),
        ("9", "Docker", "DevOps & Cloud"),
        ("10", "Agile Methodologies", "Soft Skills"),
    ]
    .into_iter()
    .map(|(id, name, category)| Skill {
        id: id.to_string(),
        data: SkillData {
            name: name.to_string(),
            category: category.to_string(),
            icon: None,
            icon_url: None,
            order: None,
        },
    })
    .collect()
}

pub fn default_categories() -> Vec<SkillCategory> {
    [
        ("frontend", "Frontend", 1),
        ("backend", "Backend", 2),
        ("devops", "DevOps & Cloud", 3),
        ("tools", "Tools", 4),
        ("softskills", "Soft Skills", 5),
        ("other", "Other", 6),
    ]
    .into_iter()
    .map(|(id, name, order)| SkillCategory {
        id: id.to_string(),
        data: SkillCategoryData {
            name: name.to_string(),
            order,
        },
    })
    .collect()
}
