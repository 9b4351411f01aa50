use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::update_skill::UpdateSkillError;
use crate::skill::domain::entities::SkillData;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<SkillData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skill.update_skill.execute(&id, req.into_inner()).await {
        Ok(skill) => ApiResponse::success(skill),

        Err(UpdateSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(UpdateSkillError::Unavailable) => ApiResponse::service_unavailable(),

        Err(UpdateSkillError::Internal(ref e)) => {
            error!(error = %e, skill_id = %id, "Skill update failed");
            ApiResponse::internal_error()
        }
    }
}
