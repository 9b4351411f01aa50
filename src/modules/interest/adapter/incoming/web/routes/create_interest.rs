use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::interest::application::use_cases::add_interest::AddInterestError;
use crate::interest::domain::entities::InterestData;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

#[post("/api/interests")]
pub async fn create_interest_handler(
    _admin: AdminUser,
    req: web::Json<InterestData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.interest.add.execute(req.into_inner()).await {
        Ok(interest) => ApiResponse::created(interest),

        Err(AddInterestError::Unavailable) => ApiResponse::service_unavailable(),

        Err(AddInterestError::Internal(ref e)) => {
            error!(error = %e, "Interest create failed");
            ApiResponse::internal_error()
        }
    }
}
