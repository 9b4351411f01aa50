use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::move_category::MoveCategoryError;
use crate::skill::domain::entities::MoveDirection;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
pub struct MoveCategoryDto {
    pub direction: MoveDirection,
}

/// Returns the full re-sorted category list so the dashboard can
/// replace its local copy in one step.
#[post("/api/skill-categories/{id}/move")]
pub async fn move_category_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<MoveCategoryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skill.move_category.execute(&id, req.direction).await {
        Ok(categories) => ApiResponse::success(categories),

        Err(MoveCategoryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Skill category not found")
        }

        Err(MoveCategoryError::Unavailable) => ApiResponse::service_unavailable(),

        Err(MoveCategoryError::Internal(ref e)) => {
            error!(error = %e, category_id = %id, "Category move failed");
            ApiResponse::internal_error()
        }
    }
}
