use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::add_education::AddEducationError;
use crate::timeline::domain::entities::EducationData;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

#[post("/api/education")]
pub async fn create_education_handler(
    _admin: AdminUser,
    req: web::Json<EducationData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.timeline.add_education.execute(req.into_inner()).await {
        Ok(education) => ApiResponse::created(education),

        Err(AddEducationError::Unavailable) => ApiResponse::service_unavailable(),

        Err(AddEducationError::Internal(ref e)) => {
            error!(error = %e, "Education create failed");
            ApiResponse::internal_error()
        }
    }
}
