//! Assembles an `AppState` for route tests. Every slot defaults to
//! the real use-case service wired against an offline store, so an
//! unconfigured slot behaves exactly like the process in fallback
//! mode; tests override only the slot under test.

use std::sync::Arc;

use actix_web::web;

use crate::AppState;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::login_admin::{LoginAdminUseCase, LoginUnavailable};
use crate::auth::application::use_cases::logout_admin::{LogoutAdminUseCase, LogoutUnavailable};

use crate::profile::adapter::outgoing::profile_store_offline::ProfileStoreOffline;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::use_cases::fetch_profile::{
    FetchProfileService, FetchProfileUseCase,
};
use crate::profile::application::use_cases::update_profile::{
    UpdateProfileService, UpdateProfileUseCase,
};
use crate::profile::domain::defaults::default_profile;

use crate::project::adapter::outgoing::project_store_offline::ProjectStoreOffline;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::use_cases::add_project::{AddProjectService, AddProjectUseCase};
use crate::project::application::use_cases::delete_project::{
    DeleteProjectService, DeleteProjectUseCase,
};
use crate::project::application::use_cases::fetch_project::{
    FetchProjectService, FetchProjectUseCase,
};
use crate::project::application::use_cases::fetch_projects::{
    FetchProjectsService, FetchProjectsUseCase,
};
use crate::project::application::use_cases::update_project::{
    UpdateProjectService, UpdateProjectUseCase,
};
use crate::project::domain::defaults::default_projects;

use crate::skill::adapter::outgoing::offline::{CategoryStoreOffline, SkillStoreOffline};
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::skill::application::use_cases::add_category::{AddCategoryService, AddCategoryUseCase};
use crate::skill::application::use_cases::add_skill::{AddSkillService, AddSkillUseCase};
use crate::skill::application::use_cases::delete_category::{
    DeleteCategoryService, DeleteCategoryUseCase,
};
use crate::skill::application::use_cases::delete_skill::{DeleteSkillService, DeleteSkillUseCase};
use crate::skill::application::use_cases::fetch_categories::{
    FetchCategoriesService, FetchCategoriesUseCase,
};
use crate::skill::application::use_cases::fetch_skills::{FetchSkillsService, FetchSkillsUseCase};
use crate::skill::application::use_cases::move_category::{
    MoveCategoryService, MoveCategoryUseCase,
};
use crate::skill::application::use_cases::update_category::{
    UpdateCategoryService, UpdateCategoryUseCase,
};
use crate::skill::application::use_cases::update_skill::{UpdateSkillService, UpdateSkillUseCase};
use crate::skill::domain::defaults::{default_categories, default_skills};

use crate::timeline::adapter::outgoing::offline::{EducationStoreOffline, ExperienceStoreOffline};
use crate::timeline::application::timeline_use_cases::TimelineUseCases;
use crate::timeline::application::use_cases::add_education::{
    AddEducationService, AddEducationUseCase,
};
use crate::timeline::application::use_cases::add_experience::{
    AddExperienceService, AddExperienceUseCase,
};
use crate::timeline::application::use_cases::delete_education::{
    DeleteEducationService, DeleteEducationUseCase,
};
use crate::timeline::application::use_cases::delete_experience::{
    DeleteExperienceService, DeleteExperienceUseCase,
};
use crate::timeline::application::use_cases::fetch_education::{
    FetchEducationService, FetchEducationUseCase,
};
use crate::timeline::application::use_cases::fetch_experiences::{
    FetchExperiencesService, FetchExperiencesUseCase,
};
use crate::timeline::application::use_cases::update_education::{
    UpdateEducationService, UpdateEducationUseCase,
};
use crate::timeline::application::use_cases::update_experience::{
    UpdateExperienceService, UpdateExperienceUseCase,
};
use crate::timeline::domain::defaults::{default_education, default_experiences};

use crate::interest::adapter::outgoing::interest_store_offline::InterestStoreOffline;
use crate::interest::application::interest_use_cases::InterestUseCases;
use crate::interest::application::use_cases::add_interest::{
    AddInterestService, AddInterestUseCase,
};
use crate::interest::application::use_cases::delete_interest::{
    DeleteInterestService, DeleteInterestUseCase,
};
use crate::interest::application::use_cases::fetch_interests::{
    FetchInterestsService, FetchInterestsUseCase,
};
use crate::interest::application::use_cases::update_interest::{
    UpdateInterestService, UpdateInterestUseCase,
};
use crate::interest::domain::defaults::default_interests;

use crate::section::adapter::outgoing::section_store_offline::SectionStoreOffline;
use crate::section::application::section_use_cases::SectionUseCases;
use crate::section::application::use_cases::fetch_sections::{
    FetchSectionsService, FetchSectionsUseCase,
};
use crate::section::application::use_cases::get_visibility::{
    GetVisibilityService, GetVisibilityUseCase,
};
use crate::section::application::use_cases::set_visibility::{
    SetVisibilityService, SetVisibilityUseCase,
};
use crate::section::domain::defaults::default_sections;

use crate::contact::adapter::outgoing::message_store_offline::MessageStoreOffline;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::use_cases::submit_message::{
    SubmitMessageService, SubmitMessageUseCase,
};

use crate::media::adapter::outgoing::storage_signer_offline::StorageSignerOffline;
use crate::media::application::media_use_cases::MediaUseCases;
use crate::media::application::use_cases::create_upload_url::{
    CreateUploadUrlService, CreateUploadUrlUseCase,
};

pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    profile: ProfileUseCases,
    project: ProjectUseCases,
    skill: SkillUseCases,
    timeline: TimelineUseCases,
    interest: InterestUseCases,
    section: SectionUseCases,
    contact: ContactUseCases,
    media: MediaUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let profile_store = Arc::new(ProfileStoreOffline);
        let project_store = Arc::new(ProjectStoreOffline);
        let skill_store = Arc::new(SkillStoreOffline);
        let category_store = Arc::new(CategoryStoreOffline);
        let experience_store = Arc::new(ExperienceStoreOffline);
        let education_store = Arc::new(EducationStoreOffline);
        let interest_store = Arc::new(InterestStoreOffline);
        let section_store = Arc::new(SectionStoreOffline);

        Self {
            auth: AuthUseCases {
                login: Arc::new(LoginUnavailable),
                logout: Arc::new(LogoutUnavailable),
            },
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
                update_experience: Arc::new(UpdateExperienceService::new(
                    experience_store.clone(),
                )),
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
                submit: Arc::new(SubmitMessageService::new(Arc::new(MessageStoreOffline))),
            },
            media: MediaUseCases {
                create_upload_url: Arc::new(CreateUploadUrlService::new(Arc::new(
                    StorageSignerOffline,
                ))),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutAdminUseCase + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl FetchProfileUseCase + 'static) -> Self {
        self.profile.fetch = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    pub fn with_fetch_projects(mut self, uc: impl FetchProjectsUseCase + 'static) -> Self {
        self.project.fetch_list = Arc::new(uc);
        self
    }

    pub fn with_fetch_project(mut self, uc: impl FetchProjectUseCase + 'static) -> Self {
        self.project.fetch_single = Arc::new(uc);
        self
    }

    pub fn with_add_project(mut self, uc: impl AddProjectUseCase + 'static) -> Self {
        self.project.add = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_fetch_skills(mut self, uc: impl FetchSkillsUseCase + 'static) -> Self {
        self.skill.fetch_skills = Arc::new(uc);
        self
    }

    pub fn with_add_skill(mut self, uc: impl AddSkillUseCase + 'static) -> Self {
        self.skill.add_skill = Arc::new(uc);
        self
    }

    pub fn with_update_skill(mut self, uc: impl UpdateSkillUseCase + 'static) -> Self {
        self.skill.update_skill = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + 'static) -> Self {
        self.skill.delete_skill = Arc::new(uc);
        self
    }

    pub fn with_fetch_categories(mut self, uc: impl FetchCategoriesUseCase + 'static) -> Self {
        self.skill.fetch_categories = Arc::new(uc);
        self
    }

    pub fn with_add_category(mut self, uc: impl AddCategoryUseCase + 'static) -> Self {
        self.skill.add_category = Arc::new(uc);
        self
    }

    pub fn with_update_category(mut self, uc: impl UpdateCategoryUseCase + 'static) -> Self {
        self.skill.update_category = Arc::new(uc);
        self
    }

    pub fn with_delete_category(mut self, uc: impl DeleteCategoryUseCase + 'static) -> Self {
        self.skill.delete_category = Arc::new(uc);
        self
    }

    pub fn with_move_category(mut self, uc: impl MoveCategoryUseCase + 'static) -> Self {
        self.skill.move_category = Arc::new(uc);
        self
    }

    pub fn with_fetch_experiences(mut self, uc: impl FetchExperiencesUseCase + 'static) -> Self {
        self.timeline.fetch_experiences = Arc::new(uc);
        self
    }

    pub fn with_add_experience(mut self, uc: impl AddExperienceUseCase + 'static) -> Self {
        self.timeline.add_experience = Arc::new(uc);
        self
    }

    pub fn with_update_experience(mut self, uc: impl UpdateExperienceUseCase + 'static) -> Self {
        self.timeline.update_experience = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(mut self, uc: impl DeleteExperienceUseCase + 'static) -> Self {
        self.timeline.delete_experience = Arc::new(uc);
        self
    }

    pub fn with_fetch_education(mut self, uc: impl FetchEducationUseCase + 'static) -> Self {
        self.timeline.fetch_education = Arc::new(uc);
        self
    }

    pub fn with_add_education(mut self, uc: impl AddEducationUseCase + 'static) -> Self {
        self.timeline.add_education = Arc::new(uc);
        self
    }

    pub fn with_update_education(mut self, uc: impl UpdateEducationUseCase + 'static) -> Self {
        self.timeline.update_education = Arc::new(uc);
        self
    }

    pub fn with_delete_education(mut self, uc: impl DeleteEducationUseCase + 'static) -> Self {
        self.timeline.delete_education = Arc::new(uc);
        self
    }

    pub fn with_fetch_interests(mut self, uc: impl FetchInterestsUseCase + 'static) -> Self {
        self.interest.fetch = Arc::new(uc);
        self
    }

    pub fn with_add_interest(mut self, uc: impl AddInterestUseCase + 'static) -> Self {
        self.interest.add = Arc::new(uc);
        self
    }

    pub fn with_update_interest(mut self, uc: impl UpdateInterestUseCase + 'static) -> Self {
        self.interest.update = Arc::new(uc);
        self
    }

    pub fn with_delete_interest(mut self, uc: impl DeleteInterestUseCase + 'static) -> Self {
        self.interest.delete = Arc::new(uc);
        self
    }

    pub fn with_fetch_sections(mut self, uc: impl FetchSectionsUseCase + 'static) -> Self {
        self.section.fetch = Arc::new(uc);
        self
    }

    pub fn with_get_visibility(mut self, uc: impl GetVisibilityUseCase + 'static) -> Self {
        self.section.get_visibility = Arc::new(uc);
        self
    }

    pub fn with_set_visibility(mut self, uc: impl SetVisibilityUseCase + 'static) -> Self {
        self.section.set_visibility = Arc::new(uc);
        self
    }

    pub fn with_submit_message(mut self, uc: impl SubmitMessageUseCase + 'static) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_create_upload_url(mut self, uc: impl CreateUploadUrlUseCase + 'static) -> Self {
        self.media.create_upload_url = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            profile: self.profile,
            project: self.project,
            skill: self.skill,
            timeline: self.timeline,
            interest: self.interest,
            section: self.section,
            contact: self.contact,
            media: self.media,
        })
    }
}
