use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::interest::application::use_cases::delete_interest::DeleteInterestError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

/// 204 whether or not the id existed.
#[delete("/api/interests/{id}")]
pub async fn delete_interest_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.interest.delete.execute(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteInterestError::Unavailable) => ApiResponse::service_unavailable(),

        Err(DeleteInterestError::Internal(ref e)) => {
            error!(error = %e, interest_id = %id, "Interest delete failed");
            ApiResponse::internal_error()
        }
    }
}
