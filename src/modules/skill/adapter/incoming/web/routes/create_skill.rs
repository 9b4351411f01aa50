use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::add_skill::AddSkillError;
use crate::skill::domain::entities::SkillData;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

#[post("/api/skills")]
pub async fn create_skill_handler(
    _admin: AdminUser,
    req: web::Json<SkillData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.add_skill.execute(req.into_inner()).await {
        Ok(skill) => ApiResponse::created(skill),

        Err(AddSkillError::Unavailable) => ApiResponse::service_unavailable(),

        Err(AddSkillError::Internal(ref e)) => {
            error!(error = %e, "Skill create failed");
            ApiResponse::internal_error()
        }
    }
}
