use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Full visibility list for the dashboard toggles. Always 200.
#[get("/api/sections")]
pub async fn get_sections_handler(data: web::Data<AppState>) -> impl Responder {
    let sections = data.section.fetch.execute().await;
    ApiResponse::success(sections)
}
