use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Public listing. Always 200; degraded backends serve the fallback set.
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    let projects = data.project.fetch_list.execute().await;
    ApiResponse::success(projects)
}
