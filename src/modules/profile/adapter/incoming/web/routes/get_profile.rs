use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Public profile read. Always 200; degraded backends serve the fallback.
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    let profile = data.profile.fetch.execute().await;
    ApiResponse::success(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::application::use_cases::fetch_profile::FetchProfileUseCase;
    use crate::profile::domain::defaults::default_profile;
    use crate::profile::domain::entities::Profile;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockFetchProfile(Profile);

    #[async_trait]
    impl FetchProfileUseCase for MockFetchProfile {
        async fn execute(&self) -> Profile {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_profile_returns_envelope() {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_profile(MockFetchProfile(Profile {
                name: "Jane Doe".to_string(),
                ..default_profile()
            }))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Jane Doe");
        assert!(body["data"]["imageUrl"].is_string());
    }
}
