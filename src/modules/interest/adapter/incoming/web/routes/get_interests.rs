use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Public interest list. Always 200.
#[get("/api/interests")]
pub async fn get_interests_handler(data: web::Data<AppState>) -> impl Responder {
    let interests = data.interest.fetch.execute().await;
    ApiResponse::success(interests)
}
