use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::delete_skill::DeleteSkillError;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

/// 204 whether or not the id existed.
#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skill.delete_skill.execute(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteSkillError::Unavailable) => ApiResponse::service_unavailable(),

        Err(DeleteSkillError::Internal(ref e)) => {
            error!(error = %e, skill_id = %id, "Skill delete failed");
            ApiResponse::internal_error()
        }
    }
}
