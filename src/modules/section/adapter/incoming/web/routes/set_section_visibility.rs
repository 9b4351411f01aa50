use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::section::application::use_cases::set_visibility::SetVisibilityError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
pub struct SetVisibilityDto {
    pub visible: bool,
}

#[put("/api/sections/{id}/visibility")]
pub async fn set_section_visibility_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<SetVisibilityDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.section.set_visibility.execute(&id, req.visible).await {
        Ok(section) => ApiResponse::success(section),

        Err(SetVisibilityError::Unavailable) => ApiResponse::service_unavailable(),

        Err(SetVisibilityError::Internal(ref e)) => {
            error!(error = %e, section_id = %id, "Visibility update failed");
            ApiResponse::internal_error()
        }
    }
}
