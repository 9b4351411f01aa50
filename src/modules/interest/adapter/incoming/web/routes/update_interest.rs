use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::interest::application::use_cases::update_interest::UpdateInterestError;
use crate::interest::domain::entities::InterestData;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;

#[put("/api/interests/{id}")]
pub async fn update_interest_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<InterestData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.interest.update.execute(&id, req.into_inner()).await {
        Ok(interest) => ApiResponse::success(interest),

        Err(UpdateInterestError::NotFound) => {
            ApiResponse::not_found("INTEREST_NOT_FOUND", "Interest not found")
        }

        Err(UpdateInterestError::Unavailable) => ApiResponse::service_unavailable(),

        Err(UpdateInterestError::Internal(ref e)) => {
            error!(error = %e, interest_id = %id, "Interest update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::application::use_cases::update_interest::UpdateInterestUseCase;
    use crate::interest::domain::defaults::default_interests;
    use crate::interest::domain::entities::Interest;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{admin_auth_data, admin_bearer};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockUpdateEcho;

    #[async_trait]
    impl UpdateInterestUseCase for MockUpdateEcho {
        async fn execute(
            &self,
            id: &str,
            data: InterestData,
        ) -> Result<Interest, UpdateInterestError> {
            Ok(Interest {
                id: id.to_string(),
                data,
            })
        }
    }

    #[actix_web::test]
    async fn test_update_interest_echoes_path_id() {
        let app_state = TestAppStateBuilder::default()
            .with_update_interest(MockUpdateEcho)
            .build();
        let (tokens, blacklist) = admin_auth_data();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(tokens)
                .app_data(blacklist)
                .service(update_interest_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/interests/i-2")
            .insert_header(admin_bearer())
            .set_json(default_interests().remove(1).data)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], "i-2");
        assert_eq!(body["data"]["name"], "Machine Learning");
    }
}
