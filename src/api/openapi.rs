use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::adapter::incoming::web::routes::login::LoginRequestDto;
use crate::contact::domain::entities::ContactForm;

/// Swagger coverage is limited to the endpoints external callers
/// integrate against: the admin session pair and the public contact
/// form. The content CRUD surface is consumed by the bundled
/// dashboard only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Backend API",
        version = "1.0.0",
        description = "Content backend for a personal portfolio site with an admin dashboard"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::login::login_handler,
        crate::auth::adapter::incoming::web::routes::logout::logout_handler,
        crate::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,
    ),
    components(schemas(ErrorResponse, ErrorDetail, LoginRequestDto, ContactForm)),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "contact", description = "Public contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin session token"))
                        .build(),
                ),
            )
        }
    }
}
