use crate::project::application::use_cases::fetch_project::FetchProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.fetch_single.execute(&id).await {
        Ok(project) => ApiResponse::success(project),

        Err(FetchProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(FetchProjectError::Unavailable) => ApiResponse::service_unavailable(),

        Err(FetchProjectError::Internal(ref e)) => {
            error!(error = %e, project_id = %id, "Project fetch failed");
            ApiResponse::internal_error()
        }
    }
}
