use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::project::application::use_cases::delete_project::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

/// 204 whether or not the id existed.
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.delete.execute(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteProjectError::Unavailable) => ApiResponse::service_unavailable(),

        Err(DeleteProjectError::Internal(ref e)) => {
            error!(error = %e, project_id = %id, "Project delete failed");
            ApiResponse::internal_error()
        }
    }
}
