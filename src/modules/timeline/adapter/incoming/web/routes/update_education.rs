use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::update_education::UpdateEducationError;
use crate::timeline::domain::entities::EducationData;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;

#[put("/api/education/{id}")]
pub async fn update_education_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<EducationData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .timeline
        .update_education
        .execute(&id, req.into_inner())
        .await
    {
        Ok(education) => ApiResponse::success(education),

        Err(UpdateEducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education record not found")
        }

        Err(UpdateEducationError::Unavailable) => ApiResponse::service_unavailable(),

        Err(UpdateEducationError::Internal(ref e)) => {
            error!(error = %e, education_id = %id, "Education update failed");
            ApiResponse::internal_error()
        }
    }
}
