use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Public education history, most recent first. Always 200.
#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    let education = data.timeline.fetch_education.execute().await;
    ApiResponse::success(education)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::timeline::application::use_cases::fetch_education::FetchEducationUseCase;
    use crate::timeline::domain::defaults::default_education;
    use crate::timeline::domain::entities::Education;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockFetch(Vec<Education>);

    #[async_trait]
    impl FetchEducationUseCase for MockFetch {
        async fn execute(&self) -> Vec<Education> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_education_returns_envelope() {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_education(MockFetch(default_education()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_education_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/education").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["institution"], "Stanford University");
        assert_eq!(body["data"][0]["endDate"], "2017-06-30");
    }
}
