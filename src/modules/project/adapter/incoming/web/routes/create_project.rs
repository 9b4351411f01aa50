use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::project::application::use_cases::add_project::AddProjectError;
use crate::project::domain::entities::ProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<ProjectData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.add.execute(req.into_inner()).await {
        Ok(project) => ApiResponse::created(project),

        Err(AddProjectError::Unavailable) => ApiResponse::service_unavailable(),

        Err(AddProjectError::Internal(ref e)) => {
            error!(error = %e, "Project create failed");
            ApiResponse::internal_error()
        }
    }
}
