use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::update_experience::UpdateExperienceError;
use crate::timeline::domain::entities::ExperienceData;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;

#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<ExperienceData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .timeline
        .update_experience
        .execute(&id, req.into_inner())
        .await
    {
        Ok(experience) => ApiResponse::success(experience),

        Err(UpdateExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(UpdateExperienceError::Unavailable) => ApiResponse::service_unavailable(),

        Err(UpdateExperienceError::Internal(ref e)) => {
            error!(error = %e, experience_id = %id, "Experience update failed");
            ApiResponse::internal_error()
        }
    }
}
