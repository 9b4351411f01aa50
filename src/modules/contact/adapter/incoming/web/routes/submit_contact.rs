use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::contact::application::use_cases::submit_message::SubmitMessageError;
use crate::contact::domain::entities::ContactForm;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

/// Contact form submission
///
/// Stores a message from the public contact form. No authentication.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactForm,
    responses(
        (
            status = 201,
            description = "Message stored",
            body = inline(SuccessResponse<serde_json::Value>),
            example = json!({
                "success": true,
                "data": {
                    "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "subject": "Freelance inquiry",
                    "message": "Hi, I'd like to talk about a project.",
                    "createdAt": "2026-01-01T12:00:00Z",
                    "read": false
                }
            })
        ),
        (
            status = 400,
            description = "Missing field or malformed email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid email address"
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
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = req.into_inner();

    if form.name.trim().is_empty()
        || form.subject.trim().is_empty()
        || form.message.trim().is_empty()
    {
        return ApiResponse::bad_request("VALIDATION_ERROR", "All fields are required");
    }

    if !email_address::EmailAddress::is_valid(form.email.trim()) {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Invalid email address");
    }

    match data.contact.submit.execute(form).await {
        Ok(message) => ApiResponse::created(message),

        Err(SubmitMessageError::Unavailable) => ApiResponse::service_unavailable(),

        Err(SubmitMessageError::Internal(ref e)) => {
            error!(error = %e, "Contact submission failed");
            ApiResponse::internal_error()
        }
    }
}
