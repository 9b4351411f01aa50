pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::contact;
pub use modules::interest;
pub use modules::media;
pub use modules::profile;
pub use modules::project;
pub use modules::section;
pub use modules::skill;
pub use modules::timeline;

use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::shared::api::json_config::custom_json_config;
use crate::shared::backend::{Backend, BackendConfig};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::offline::{OfflineTokenBlacklist, OfflineTokenProvider};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::login_admin::{LoginAdminService, LoginUnavailable};
use crate::auth::application::use_cases::logout_admin::{LogoutAdminService, LogoutUnavailable};
use crate::auth::domain::AdminCredentials;

use crate::profile::adapter::outgoing::profile_store_offline::ProfileStoreOffline;
use crate::profile::adapter::outgoing::profile_store_postgres::ProfileStorePostgres;
use crate::profile::application::ports::outgoing::profile_store::ProfileStore;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::use_cases::fetch_profile::FetchProfileService;
use crate::profile::application::use_cases::update_profile::UpdateProfileService;
use crate::profile::domain::defaults::default_profile;

use crate::project::adapter::outgoing::project_store_offline::ProjectStoreOffline;
use crate::project::adapter::outgoing::project_store_postgres::ProjectStorePostgres;
use crate::project::application::ports::outgoing::project_store::ProjectStore;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::use_cases::add_project::AddProjectService;
use crate::project::application::use_cases::delete_project::DeleteProjectService;
use crate::project::application::use_cases::fetch_project::FetchProjectService;
use crate::project::application::use_cases::fetch_projects::FetchProjectsService;
use crate::project::application::use_cases::update_project::UpdateProjectService;
use crate::project::domain::defaults::default_projects;

use crate::skill::adapter::outgoing::category_store_postgres::CategoryStorePostgres;
use crate::skill::adapter::outgoing::offline::{CategoryStoreOffline, SkillStoreOffline};
use crate::skill::adapter::outgoing::skill_store_postgres::SkillStorePostgres;
use crate::skill::application::ports::outgoing::category_store::CategoryStore;
use crate::skill::application::ports::outgoing::skill_store::SkillStore;
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::skill::application::use_cases::add_category::AddCategoryService;
use crate::skill::application::use_cases::add_skill::AddSkillService;
use crate::skill::application::use_cases::delete_category::DeleteCategoryService;
use crate::skill::application::use_cases::delete_skill::DeleteSkillService;
use crate::skill::application::use_cases::fetch_categories::FetchCategoriesService;
use crate::skill::application::use_cases::fetch_skills::FetchSkillsService;
use crate::skill::application::use_cases::move_category::MoveCategoryService;
use crate::skill::application::use_cases::update_category::UpdateCategoryService;
use crate::skill::application::use_cases::update_skill::UpdateSkillService;
use crate::skill::domain::defaults::{default_categories, default_skills};

use crate::timeline::adapter::outgoing::education_store_postgres::EducationStorePostgres;
use crate::timeline::adapter::outgoing::experience_store_postgres::ExperienceStorePostgres;
use crate::timeline::adapter::outgoing::offline::{EducationStoreOffline, ExperienceStoreOffline};
use crate::timeline::application::ports::outgoing::education_store::EducationStore;
use crate::timeline::application::ports::outgoing::experience_store::ExperienceStore;
use crate::timeline::application::timeline_use_cases::TimelineUseCases;
use crate::timeline::application::use_cases::add_education::AddEducationService;
use crate::timeline::application::use_cases::add_experience::AddExperienceService;
use crate::timeline::application::use_cases::delete_education::DeleteEducationService;
use crate::timeline::application::use_cases::delete_experience::DeleteExperienceService;
use crate::timeline::application::use_cases::fetch_education::FetchEducationService;
use crate::timeline::application::use_cases::fetch_experiences::FetchExperiencesService;
use crate::timeline::application::use_cases::update_education::UpdateEducationService;
use crate::timeline::application::use_cases::update_experience::UpdateExperienceService;
use crate::timeline::domain::defaults::{default_education, default_experiences};

use crate::interest::adapter::outgoing::interest_store_offline::InterestStoreOffline;
use crate::interest::adapter::outgoing::interest_store_postgres::InterestStorePostgres;
use crate::interest::application::interest_use_cases::InterestUseCases;
use crate::interest::application::ports::outgoing::interest_store::InterestStore;
use crate::interest::application::use_cases::add_interest::AddInterestService;
use crate::interest::application::use_cases::delete_interest::DeleteInterestService;
use crate::interest::application::use_cases::fetch_interests::FetchInterestsService;
use crate::interest::application::use_cases::update_interest::UpdateInterestService;
use crate::interest::domain::defaults::default_interests;

use crate::section::adapter::outgoing::section_store_offline::SectionStoreOffline;
use crate::section::adapter::outgoing::section_store_postgres::SectionStorePostgres;
use crate::section::application::ports::outgoing::section_store::SectionStore;
use crate::section::application::section_use_cases::SectionUseCases;
use crate::section::application::use_cases::fetch_sections::FetchSectionsService;
use crate::section::application::use_cases::get_visibility::GetVisibilityService;
use crate::section::application::use_cases::set_visibility::SetVisibilityService;
use crate::section::domain::defaults::default_sections;

use crate::contact::adapter::outgoing::message_store_offline::MessageStoreOffline;
use crate::contact::adapter::outgoing::message_store_postgres::MessageStorePostgres;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::outgoing::message_store::MessageStore;
use crate::contact::application::use_cases::submit_message::SubmitMessageService;

use crate::media::adapter::outgoing::storage_signer_gcs::GcsStorageSigner;
use crate::media::adapter::outgoing::storage_signer_offline::StorageSignerOffline;
use crate::media::application::media_use_cases::MediaUseCases;
use crate::media::application::ports::outgoing::storage_signer::StorageSigner;
use crate::media::application::use_cases::create_upload_url::CreateUploadUrlService;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub profile: ProfileUseCases,
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
    pub timeline: TimelineUseCases,
    pub interest: InterestUseCases,
    pub section: SectionUseCases,
    pub contact: ContactUseCases,
    pub media: MediaUseCases,
}

struct Wiring {
    state: AppState,
    tokens: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklist>,
}

/// Assembles stores and use cases for the availability mode decided at
/// startup. Offline wiring serves fallback content on every read and
/// BACKEND_UNAVAILABLE on every write.
fn build_wiring(backend: &Backend) -> Wiring {
    let (
        tokens,
        blacklist,
        auth,
        profile_store,
        project_store,
        skill_store,
        category_store,
        experience_store,
        education_store,
        interest_store,
        section_store,
        message_store,
        storage_signer,
    ): (
        Arc<dyn TokenProvider>,
        Arc<dyn TokenBlacklist>,
        AuthUseCases,
        Arc<dyn ProfileStore>,
        Arc<dyn ProjectStore>,
        Arc<dyn SkillStore>,
        Arc<dyn CategoryStore>,
        Arc<dyn ExperienceStore>,
        Arc<dyn EducationStore>,
        Arc<dyn InterestStore>,
        Arc<dyn SectionStore>,
        Arc<dyn MessageStore>,
        Arc<dyn StorageSigner>,
    ) = match backend {
        Backend::Online { db, redis, config } => {
            let tokens: Arc<dyn TokenProvider> = Arc::new(JwtTokenService::new(JwtConfig::new(
                config.jwt_secret.clone(),
            )));
            let blacklist: Arc<dyn TokenBlacklist> =
                Arc::new(RedisTokenBlacklist::new(Arc::clone(redis)));

            let credentials = AdminCredentials {
                email: config.admin_email.clone(),
                password_hash: config.admin_password_hash.clone(),
            };

            let auth = AuthUseCases {
                login: Arc::new(LoginAdminService::new(
                    credentials,
                    Arc::new(Argon2Hasher::new()),
                    tokens.clone(),
                )),
                logout: Arc::new(LogoutAdminService::new(blacklist.clone())),
            };

            (
                tokens,
                blacklist,
                auth,
                Arc::new(ProfileStorePostgres::new(Arc::clone(db))),
                Arc::new(ProjectStorePostgres::new(Arc::clone(db))),
                Arc::new(SkillStorePostgres::new(Arc::clone(db))),
                Arc::new(CategoryStorePostgres::new(Arc::clone(db))),
                Arc::new(ExperienceStorePostgres::new(Arc::clone(db))),
                Arc::new(EducationStorePostgres::new(Arc::clone(db))),
                Arc::new(InterestStorePostgres::new(Arc::clone(db))),
                Arc::new(SectionStorePostgres::new(Arc::clone(db))),
                Arc::new(MessageStorePostgres::new(Arc::clone(db))),
                Arc::new(GcsStorageSigner::new(config.storage_bucket.clone())),
            )
        }

        Backend::Offline => (
            Arc::new(OfflineTokenProvider),
            Arc::new(OfflineTokenBlacklist),
            AuthUseCases {
                login: Arc::new(LoginUnavailable),
                logout: Arc::new(LogoutUnavailable),
            },
            Arc::new(ProfileStoreOffline),
            Arc::new(ProjectStoreOffline),
            Arc::new(SkillStoreOffline),
            Arc::new(CategoryStoreOffline),
            Arc::new(ExperienceStoreOffline),
            Arc::new(EducationStoreOffline),
            Arc::new(InterestStoreOffline),
            Arc::new(SectionStoreOffline),
            Arc::new(MessageStoreOffline),
            Arc::new(StorageSignerOffline),
        ),
    };

    let state = AppState {
        auth,
        profile: ProfileUseCases {
            fetch: Arc::new(FetchProfileService::new(
                profile_store.clone(),
                default_profile(),
            )),
            update: Arc::new(UpdateProfileService::new(profile_store)),
        },
        project: ProjectUseCases {
            fetch_list: Arc::new(FetchProjectsService::new(
                project_store.clone(),
                default_projects(),
            )),
            fetch_single: Arc::new(FetchProjectService::new(
                project_store.clone(),
                default_projects(),
            )),
            add: Arc::new(AddProjectService::new(project_store.clone())),
            update: Arc::new(UpdateProjectService::new(project_store.clone())),
            delete: Arc::new(DeleteProjectService::new(project_store)),
        },
        skill: SkillUseCases {
            fetch_skills: Arc::new(FetchSkillsService::new(
                skill_store.clone(),
                default_skills(),
            )),
            add_skill: Arc::new(AddSkillService::new(skill_store.clone())),
            update_skill: Arc::new(UpdateSkillService::new(skill_store.clone())),
            delete_skill: Arc::new(DeleteSkillService::new(skill_store)),
            fetch_categories: Arc::new(FetchCategoriesService::new(
                category_store.clone(),
                default_categories(),
            )),
            add_category: Arc::new(AddCategoryService::new(category_store.clone())),
            update_category: Arc::new(UpdateCategoryService::new(category_store.clone())),
            delete_category: Arc::new(DeleteCategoryService::new(category_store.clone())),
            move_category: Arc::new(MoveCategoryService::new(category_store)),
        },
        timeline: TimelineUseCases {
            fetch_experiences: Arc::new(FetchExperiencesService::new(
                experience_store.clone(),
                default_experiences(),
            )),
            add_experience: Arc::new(AddExperienceService::new(experience_store.clone())),
            update_experience: Arc::new(UpdateExperienceService::new(experience_store.clone())),
            delete_experience: Arc::new(DeleteExperienceService::new(experience_store)),
            fetch_education: Arc::new(FetchEducationService::new(
                education_store.clone(),
                default_education(),
            )),
            add_education: Arc::new(AddEducationService::new(education_store.clone())),
            update_education: Arc::new(UpdateEducationService::new(education_store.clone())),
            delete_education: Arc::new(DeleteEducationService::new(education_store)),
        },
        interest: InterestUseCases {
            fetch: Arc::new(FetchInterestsService::new(
                interest_store.clone(),
                default_interests(),
            )),
            add: Arc::new(AddInterestService::new(interest_store.clone())),
            update: Arc::new(UpdateInterestService::new(interest_store.clone())),
            delete: Arc::new(DeleteInterestService::new(interest_store)),
        },
        section: SectionUseCases {
            fetch: Arc::new(FetchSectionsService::new(
                section_store.clone(),
                default_sections(),
            )),
            get_visibility: Arc::new(GetVisibilityService::new(section_store.clone())),
            set_visibility: Arc::new(SetVisibilityService::new(section_store)),
        },
        contact: ContactUseCases {
            submit: Arc::new(SubmitMessageService::new(message_store)),
        },
        media: MediaUseCases {
            create_upload_url: Arc::new(CreateUploadUrlService::new(storage_signer)),
        },
    };

    Wiring {
        state,
        tokens,
        blacklist,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    let backend = Backend::connect(BackendConfig::from_env()).await;
    if !backend.is_online() {
        info!("Serving fallback content only; all writes will be rejected");
    }

    let wiring = build_wiring(&backend);
    let state = wiring.state;
    let tokens = wiring.tokens;
    let blacklist = wiring.blacklist;

    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(tokens.clone()))
            .app_data(web::Data::new(blacklist.clone()))
            .app_data(web::Data::new(backend.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Skills and categories
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_category_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_category_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_category_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::move_category_handler);
    // Timeline
    cfg.service(crate::timeline::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::delete_experience_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::get_education_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::create_education_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::update_education_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::delete_education_handler);
    // Interests
    cfg.service(crate::interest::adapter::incoming::web::routes::get_interests_handler);
    cfg.service(crate::interest::adapter::incoming::web::routes::create_interest_handler);
    cfg.service(crate::interest::adapter::incoming::web::routes::update_interest_handler);
    cfg.service(crate::interest::adapter::incoming::web::routes::delete_interest_handler);
    // Sections
    cfg.service(crate::section::adapter::incoming::web::routes::get_sections_handler);
    cfg.service(crate::section::adapter::incoming::web::routes::get_section_visibility_handler);
    cfg.service(crate::section::adapter::incoming::web::routes::set_section_visibility_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    // Uploads
    cfg.service(crate::media::adapter::incoming::web::routes::create_upload_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
