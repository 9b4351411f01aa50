use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::delete_experience::DeleteExperienceError;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

/// 204 whether or not the id existed.
#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.timeline.delete_experience.execute(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteExperienceError::Unavailable) => ApiResponse::service_unavailable(),

        Err(DeleteExperienceError::Internal(ref e)) => {
            error!(error = %e, experience_id = %id, "Experience delete failed");
            ApiResponse::internal_error()
        }
    }
}
