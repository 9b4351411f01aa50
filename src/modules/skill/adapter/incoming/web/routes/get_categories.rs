use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Categories in display order (ascending `order`). Always 200.
#[get("/api/skill-categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    let categories = data.skill.fetch_categories.execute().await;
    ApiResponse::success(categories)
}
