use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::auth::application::ports::outgoing::token_provider::{TokenClaims, TokenProvider};
use crate::shared::api::ApiResponse;

/// Represents the authenticated site administrator.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
    pub claims: TokenClaims,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let tokens = match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider>>>() {
                Some(service) => service.get_ref().clone(),
                None => {
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            };
            let blacklist = match req.app_data::<actix_web::web::Data<Arc<dyn TokenBlacklist>>>() {
                Some(service) => service.get_ref().clone(),
                None => {
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            };

            let token = match extract_token_from_header(&req) {
                Some(t) => t,
                None => {
                    return Err(create_api_error(ApiResponse::unauthorized(
                        "MISSING_AUTH_HEADER",
                        "Missing or invalid authorization header",
                    )));
                }
            };

            let claims = match tokens.verify_token(&token) {
                Ok(claims) => claims,
                Err(_) => {
                    return Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN",
                        "Invalid or expired token",
                    )));
                }
            };

            if claims.token_type != "access" {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                )));
            }

            match blacklist.is_revoked(&claims.jti).await {
                Ok(false) => {}
                Ok(true) => {
                    return Err(create_api_error(ApiResponse::unauthorized(
                        "SESSION_REVOKED",
                        "Session has been revoked",
                    )));
                }
                Err(e) => {
                    tracing::error!("Blacklist lookup failed: {}", e);
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            }

            Ok(AdminUser {
                email: claims.sub.clone(),
                claims,
            })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
