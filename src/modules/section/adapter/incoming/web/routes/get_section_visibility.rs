use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;

#[derive(Serialize)]
pub struct VisibilityView {
    pub id: String,
    pub visible: bool,
}

/// Visibility flag for one section. Always 200; unknown ids read as
/// visible.
#[get("/api/sections/{id}/visibility")]
pub async fn get_section_visibility_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let visible = data.section.get_visibility.execute(&id).await;

    ApiResponse::success(VisibilityView { id, visible })
}
