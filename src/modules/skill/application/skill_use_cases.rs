use std::sync::Arc;

use crate::skill::application::use_cases::add_category::AddCategoryUseCase;
use crate::skill::application::use_cases::add_skill::AddSkillUseCase;
use crate::skill::application::use_cases::delete_category::DeleteCategoryUseCase;
use crate::skill::application::use_cases::delete_skill::DeleteSkillUseCase;
use crate::skill::application::use_cases::fetch_categories::FetchCategoriesUseCase;
use crate::skill::application::use_cases::fetch_skills::FetchSkillsUseCase;
use crate::skill::application::use_cases::move_category::MoveCategoryUseCase;
use crate::skill::application::use_cases::update_category::UpdateCategoryUseCase;
use crate::skill::application::use_cases::update_skill::UpdateSkillUseCase;

#[derive(Clone)]
pub struct SkillUseCases {
    pub fetch_skills: Arc<dyn FetchSkillsUseCase + Send + Sync>,
    pub add_skill: Arc<dyn AddSkillUseCase + Send + Sync>,
    pub update_skill: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete_skill: Arc<dyn DeleteSkillUseCase + Send + Sync>,
    pub fetch_categories: Arc<dyn FetchCategoriesUseCase + Send + Sync>,
    pub add_category: Arc<dyn AddCategoryUseCase + Send + Sync>,
    pub update_category: Arc<dyn UpdateCategoryUseCase + Send + Sync>,
    pub delete_category: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
    pub move_category: Arc<dyn MoveCategoryUseCase + Send + Sync>,
}
