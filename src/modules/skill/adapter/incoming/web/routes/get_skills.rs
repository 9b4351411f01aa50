use crate::shared::api::ApiResponse;
use crate::skill::domain::entities::{DisplayIcon, Skill};
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;

/// Skill plus the icon the public site should actually render:
/// uploaded image URL first, then the builtin name, then `code`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SkillView {
    #[serde(flatten)]
    skill: Skill,
    display_icon: String,
}

impl From<Skill> for SkillView {
    fn from(skill: Skill) -> Self {
        let display_icon = match skill.data.display_icon() {
            DisplayIcon::Url(url) => url,
            DisplayIcon::Builtin(icon) => icon.as_str().to_string(),
        };
        Self { skill, display_icon }
    }
}

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    let skills: Vec<SkillView> = data
        .skill
        .fetch_skills
        .execute()
        .await
        .into_iter()
        .map(SkillView::from)
        .collect();

    ApiResponse::success(skills)
}
