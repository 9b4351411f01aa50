use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Public work history, most recent first. Always 200.
#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    let experiences = data.timeline.fetch_experiences.execute().await;
    ApiResponse::success(experiences)
}
