use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::add_category::AddCategoryError;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
pub struct CreateCategoryDto {
    pub name: String,

    /// Defaults to the next free order slot when absent.
    pub order: Option<i32>,
}

#[post("/api/skill-categories")]
pub async fn create_category_handler(
    _admin: AdminUser,
    req: web::Json<CreateCategoryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.skill.add_category.execute(dto.name, dto.order).await {
        Ok(category) => ApiResponse::created(category),

        Err(AddCategoryError::Unavailable) => ApiResponse::service_unavailable(),

        Err(AddCategoryError::Internal(ref e)) => {
            error!(error = %e, "Category create failed");
            ApiResponse::internal_error()
        }
    }
}
