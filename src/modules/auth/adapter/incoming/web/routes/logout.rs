use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::use_cases::logout_admin::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};

use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
struct LogoutResponseBody {
    message: String,
}

/// Admin logout
///
/// Revokes the presented session token until its natural expiry.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Logged out",
            body = inline(SuccessResponse<LogoutResponseBody>),
            example = json!({
                "success": true,
                "data": { "message": "Logged out successfully" }
            })
        ),
        (
            status = 401,
            description = "Missing or invalid token",
            body = ErrorResponse
        ),
        (
            status = 503,
            description = "Backend not configured",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    info!("Admin logout");

    match data.auth.logout.execute(&admin.claims).await {
        Ok(()) => ApiResponse::success(LogoutResponseBody {
            message: "Logged out successfully".to_string(),
        }),

        Err(LogoutError::Unavailable) => {
            warn!("Logout rejected: backend offline");
            ApiResponse::service_unavailable()
        }

        Err(LogoutError::RevocationFailed(ref e)) => {
            error!(error = %e, "Token revocation failed during logout");
            ApiResponse::internal_error()
        }
    }
}
