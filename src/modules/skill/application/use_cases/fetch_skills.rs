use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::skill::application::ports::outgoing::skill_store::SkillStore;
use crate::skill::domain::entities::Skill;
use crate::skill::domain::ordering::sort_skills;

/// Public skill list. Never fails: any store error or an empty
/// collection degrades to the injected fallback catalog.
#[async_trait]
pub trait FetchSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Skill>;
}

pub struct FetchSkillsService {
    store: Arc<dyn SkillStore>,
    fallback: Vec<Skill>,
}

impl FetchSkillsService {
    pub fn new(store: Arc<dyn SkillStore>, fallback: Vec<Skill>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait]
impl FetchSkillsUseCase for FetchSkillsService {
    async fn execute(&self) -> Vec<Skill> {
        let skills = match self.store.list().await {
            Ok(skills) if !skills.is_empty() => skills,
            Ok(_) => self.fallback.clone(),
            Err(e) => {
                warn!(error = %e, "Skill list failed, serving fallback");
                self.fallback.clone()
            }
        };

        sort_skills(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::application::ports::outgoing::skill_store::SkillStoreError;
    use crate::skill::domain::defaults::default_skills;
    use crate::skill::domain::entities::SkillData;

    struct MockStore {
        result: Result<Vec<Skill>, SkillStoreError>,
    }

    #[async_trait]
    impl SkillStore for MockStore {
        async fn list(&self) -> Result<Vec<Skill>, SkillStoreError> {
            self.result.clone()
        }

        async fn insert(&self, _data: SkillData) -> Result<Skill, SkillStoreError> {
            unreachable!()
        }

        async fn replace(&self, _id: &str, _data: &SkillData) -> Result<(), SkillStoreError> {
            unreachable!()
        }

        async fn remove(&self, _id: &str) -> Result<(), SkillStoreError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_returns_stored_rows() {
        let mut stored = default_skills().remove(0);
        stored.data.name = "Rust".to_string();
        let store = Arc::new(MockStore {
            result: Ok(vec![stored]),
        });
        let service = FetchSkillsService::new(store, default_skills());

        let skills = service.execute().await;
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].data.name, "Rust");
    }

    #[tokio::test]
    async fn test_empty_collection_falls_back() {
        let store = Arc::new(MockStore { result: Ok(vec![]) });
        let service = FetchSkillsService::new(store, default_skills());

        assert_eq!(service.execute().await, sort_skills(default_skills()));
    }

    #[tokio::test]
    async fn test_store_error_falls_back() {
        let store = Arc::new(MockStore {
            result: Err(SkillStoreError::Database("boom".to_string())),
        });
        let service = FetchSkillsService::new(store, default_skills());

        assert_eq!(service.execute().await, sort_skills(default_skills()));
    }

    #[tokio::test]
    async fn test_applies_display_order_within_category() {
        let skill = |name: &str, order: Option<i32>| Skill {
            id: name.to_lowercase(),
            data: SkillData {
                name: name.to_string(),
                category: "Backend".to_string(),
                icon: None,
                icon_url: None,
                order,
            },
        };
        let store = Arc::new(MockStore {
            result: Ok(vec![skill("Axum", Some(5)), skill("Rust", None)]),
        });
        let service = FetchSkillsService::new(store, default_skills());

        let skills = service.execute().await;
        let names: Vec<&str> = skills.iter().map(|s| s.data.name.as_str()).collect();
        assert_eq!(names, ["Rust", "Axum"]);
    }
}
