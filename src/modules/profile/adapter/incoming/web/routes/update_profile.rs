use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::profile::application::use_cases::update_profile::UpdateProfileError;
use crate::profile::domain::entities::Profile;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;

#[put("/api/profile")]
pub async fn update_profile_handler(
    _admin: AdminUser,
    req: web::Json<Profile>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.update.execute(req.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(UpdateProfileError::Unavailable) => ApiResponse::service_unavailable(),

        Err(UpdateProfileError::Internal(ref e)) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
