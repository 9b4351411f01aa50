use crate::skill::domain::entities::{Skill, SkillCategory};

/// Ascending by `order`; sea-orm's stable sort keeps insertion order
/// for ties.
pub fn sort_by_order(mut categories: Vec<SkillCategory>) -> Vec<SkillCategory> {
    categories.sort_by_key(|c| c.data.order);
    categories
}

/// Category groups stay together; within a category ascending by the
/// effective order, so a skill without one sorts as 1, not last.
pub fn sort_skills(mut skills: Vec<Skill>) -> Vec<Skill> {
    skills.sort_by(|a, b| {
        a.data
            .category
            .cmp(&b.data.category)
            .then(a.data.sort_order().cmp(&b.data.sort_order()))
    });
    skills
}

/// Advisory add-dialog default. Not re-validated against concurrent
/// inserts; duplicate orders are allowed.
pub fn next_order(categories: &[SkillCategory]) -> i32 {
    categories
        .iter()
        .map(|c| c.data.order)
        .max()
        .map_or(1, |max| max + 1)
}
