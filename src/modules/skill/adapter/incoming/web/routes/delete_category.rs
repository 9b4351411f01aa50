use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::delete_category::DeleteCategoryError;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

/// 204 whether or not the id existed.
#[delete("/api/skill-categories/{id}")]
pub async fn delete_category_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skill.delete_category.execute(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteCategoryError::Unavailable) => ApiResponse::service_unavailable(),

        Err(DeleteCategoryError::Internal(ref e)) => {
            error!(error = %e, category_id = %id, "Category delete failed");
            ApiResponse::internal_error()
        }
    }
}
