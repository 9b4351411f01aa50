use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde::Serialize;
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from the admin dashboard
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT access token for the admin session
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Session expiry as an RFC 3339 timestamp
    #[schema(example = "2026-01-01T12:00:00Z")]
    expires_at: String,
}

/// Admin login
///
/// Authenticates the site administrator and returns a JWT access token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expiresAt": "2026-01-01T12:00:00Z"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 503,
            description = "Backend not configured",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "BACKEND_UNAVAILABLE",
                    "message": "Backend is not configured or reachable"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    if dto.email.trim().is_empty() || dto.password.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Email and password are required");
    }

    if !email_address::EmailAddress::is_valid(dto.email.trim()) {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Invalid email address");
    }

    info!("Admin login attempt");

    match data.auth.login.execute(&dto.email, &dto.password).await {
        Ok(result) => {
            info!("Admin logged in");
            ApiResponse::success(LoginResponse {
                access_token: result.access_token,
                expires_at: result.expires_at.to_rfc3339(),
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::Unavailable) => {
            warn!("Login rejected: backend offline");
            ApiResponse::service_unavailable()
        }

        Err(LoginError::Internal(ref e)) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
