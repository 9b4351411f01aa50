use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::project::application::use_cases::update_project::UpdateProjectError;
use crate::project::domain::entities::ProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<ProjectData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.update.execute(&id, req.into_inner()).await {
        Ok(project) => ApiResponse::success(project),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::Unavailable) => ApiResponse::service_unavailable(),

        Err(UpdateProjectError::Internal(ref e)) => {
            error!(error = %e, project_id = %id, "Project update failed");
            ApiResponse::internal_error()
        }
    }
}
