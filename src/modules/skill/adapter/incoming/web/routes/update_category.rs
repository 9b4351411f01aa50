use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::update_category::UpdateCategoryError;
use crate::skill::domain::entities::SkillCategoryData;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;

#[put("/api/skill-categories/{id}")]
pub async fn update_category_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<SkillCategoryData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .skill
        .update_category
        .execute(&id, req.into_inner())
        .await
    {
        Ok(category) => ApiResponse::success(category),

        Err(UpdateCategoryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Skill category not found")
        }

        Err(UpdateCategoryError::Unavailable) => ApiResponse::service_unavailable(),

        Err(UpdateCategoryError::Internal(ref e)) => {
            error!(error = %e, category_id = %id, "Category update failed");
            ApiResponse::internal_error()
        }
    }
}
