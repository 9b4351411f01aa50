use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::add_experience::AddExperienceError;
use crate::timeline::domain::entities::ExperienceData;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

#[post("/api/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    req: web::Json<ExperienceData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.timeline.add_experience.execute(req.into_inner()).await {
        Ok(experience) => ApiResponse::created(experience),

        Err(AddExperienceError::Unavailable) => ApiResponse::service_unavailable(),

        Err(AddExperienceError::Internal(ref e)) => {
            error!(error = %e, "Experience create failed");
            ApiResponse::internal_error()
        }
    }
}
