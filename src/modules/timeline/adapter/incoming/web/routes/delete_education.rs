use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::delete_education::DeleteEducationError;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

/// 204 whether or not the id existed.
#[delete("/api/education/{id}")]
pub async fn delete_education_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.timeline.delete_education.execute(&id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteEducationError::Unavailable) => ApiResponse::service_unavailable(),

        Err(DeleteEducationError::Internal(ref e)) => {
            error!(error = %e, education_id = %id, "Education delete failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{admin_auth_data, admin_bearer};
    use crate::timeline::application::use_cases::delete_education::DeleteEducationUseCase;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockDelete;

    #[async_trait]
    impl DeleteEducationUseCase for MockDelete {
        async fn execute(&self, _id: &str) -> Result<(), DeleteEducationError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn test_delete_education_returns_204() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_education(MockDelete)
            .build();
        let (tokens, blacklist) = admin_auth_data();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(tokens)
                .app_data(blacklist)
                .service(delete_education_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/education/ed-1")
            .insert_header(admin_bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
    }
}
