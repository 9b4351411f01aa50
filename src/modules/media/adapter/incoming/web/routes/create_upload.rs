use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::media::application::use_cases::create_upload_url::CreateUploadUrlError;
use crate::media::domain::entities::UploadFolder;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
pub struct CreateUploadDto {
    pub folder: UploadFolder,
    pub filename: String,
}

/// Issues a signed PUT URL; the dashboard uploads the file bytes
/// directly to storage and stores the returned public URL on the
/// record it is editing.
#[post("/api/uploads")]
pub async fn create_upload_handler(
    _admin: AdminUser,
    req: web::Json<CreateUploadDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .media
        .create_upload_url
        .execute(dto.folder, &dto.filename)
        .await
    {
        Ok(ticket) => ApiResponse::created(ticket),

        Err(CreateUploadUrlError::InvalidFilename) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Invalid filename")
        }

        Err(CreateUploadUrlError::Unavailable) => ApiResponse::service_unavailable(),

        Err(CreateUploadUrlError::Internal(ref e)) => {
            error!(error = %e, "Upload URL signing failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::application::use_cases::create_upload_url::CreateUploadUrlUseCase;
    use crate::media::domain::entities::UploadTicket;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{admin_auth_data, admin_bearer};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockCreateUpload;

    #[async_trait]
    impl CreateUploadUrlUseCase for MockCreateUpload {
        async fn execute(
            &self,
            folder: UploadFolder,
            filename: &str,
        ) -> Result<UploadTicket, CreateUploadUrlError> {
            let object = format!("{}/1700000000000_{}", folder.prefix(), filename);
            Ok(UploadTicket {
                upload_url: format!("https://signed.example/{}", object),
                public_url: format!("https://storage.googleapis.com/folio-content/{}", object),
                object_name: object,
            })
        }
    }

    struct MockCreateUploadOffline;

    #[async_trait]
    impl CreateUploadUrlUseCase for MockCreateUploadOffline {
        async fn execute(
            &self,
            _folder: UploadFolder,
            _filename: &str,
        ) -> Result<UploadTicket, CreateUploadUrlError> {
            Err(CreateUploadUrlError::Unavailable)
        }
    }

    #[actix_web::test]
    async fn test_create_upload_returns_ticket() {
        let app_state = TestAppStateBuilder::default()
            .with_create_upload_url(MockCreateUpload)
            .build();
        let (tokens, blacklist) = admin_auth_data();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(tokens)
                .app_data(blacklist)
                .service(create_upload_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/uploads")
            .insert_header(admin_bearer())
            .set_json(serde_json::json!({
                "folder": "skills/icons",
                "filename": "rust.png"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["publicUrl"],
            "https://storage.googleapis.com/folio-content/skills/icons/1700000000000_rust.png"
        );
        assert!(body["data"]["uploadUrl"]
            .as_str()
            .unwrap()
            .starts_with("https://signed.example/"));
    }

    #[actix_web::test]
    async fn test_create_upload_rejects_unknown_folder() {
        let app_state = TestAppStateBuilder::default()
            .with_create_upload_url(MockCreateUpload)
            .build();
        let (tokens, blacklist) = admin_auth_data();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(tokens)
                .app_data(blacklist)
                .service(create_upload_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/uploads")
            .insert_header(admin_bearer())
            .set_json(serde_json::json!({
                "folder": "secrets",
                "filename": "rust.png"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_create_upload_offline_is_503() {
        let app_state = TestAppStateBuilder::default()
            .with_create_upload_url(MockCreateUploadOffline)
            .build();
        let (tokens, blacklist) = admin_auth_data();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(tokens)
                .app_data(blacklist)
                .service(create_upload_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/uploads")
            .insert_header(admin_bearer())
            .set_json(serde_json::json!({
                "folder": "profile",
                "filename": "avatar.png"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);
    }

    #[actix_web::test]
    async fn test_create_upload_requires_auth() {
        let app_state = TestAppStateBuilder::default()
            .with_create_upload_url(MockCreateUpload)
            .build();
        let (tokens, blacklist) = admin_auth_data();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(tokens)
                .app_data(blacklist)
                .service(create_upload_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/uploads")
            .set_json(serde_json::json!({
                "folder": "profile",
                "filename": "avatar.png"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
