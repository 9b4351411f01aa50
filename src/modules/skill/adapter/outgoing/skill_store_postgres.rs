use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::skill::adapter::outgoing::skill_entity::{self, ActiveModel, Column, Entity};
use crate::skill::application::ports::outgoing::skill_store::{SkillStore, SkillStoreError};
use crate::skill::domain::entities::{Skill, SkillData, SkillIcon};

#[derive(Clone)]
pub struct SkillStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillStore for SkillStorePostgres {
    async fn list(&self) -> Result<Vec<Skill>, SkillStoreError> {
        let rows = Entity::find()
            .order_by_asc(Column::Category)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_skill).collect()
    }

    async fn insert(&self, data: SkillData) -> Result<Skill, SkillStoreError> {
        let id = Uuid::new_v4().to_string();

        Entity::insert(data_to_active_model(&id, &data))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Skill { id, data })
    }

    async fn replace(&self, id: &str, data: &SkillData) -> Result<(), SkillStoreError> {
        let result = Entity::update_many()
            .set(data_to_active_model(id, data))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillStoreError::NotFound);
        }

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), SkillStoreError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn data_to_active_model(id: &str, data: &SkillData) -> ActiveModel {
    ActiveModel {
        id: Set(id.to_string()),
        name: Set(data.name.clone()),
        category: Set(data.category.clone()),
        icon: Set(data.icon.map(|i| i.as_str().to_string())),
        icon_url: Set(data.icon_url.clone()),
        sort_order: Set(data.order),
    }
}

fn model_to_skill(model: skill_entity::Model) -> Result<Skill, SkillStoreError> {
    let icon = match model.icon.as_deref() {
        Some(name) => Some(SkillIcon::parse(name).ok_or_else(|| {
            SkillStoreError::Serialization(format!("unknown skill icon {name:?}"))
        })?),
        None => None,
    };

    Ok(Skill {
        id: model.id,
        data: SkillData {
            name: model.name,
            category: model.category,
            icon,
            icon_url: model.icon_url,
            order: model.sort_order,
        },
    })
}

fn map_db_err(e: DbErr) -> SkillStoreError {
    SkillStoreError::Database(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_model(id: &str, icon: Option<&str>) -> skill_entity::Model {
        skill_entity::Model {
            id: id.to_string(),
            name: "Rust".to_string(),
            category: "Backend".to_string(),
            icon: icon.map(str::to_string),
            icon_url: None,
            sort_order: Some(2),
        }
    }

    #[tokio::test]
    async fn test_list_parses_icon_names() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("s-1", Some("git-branch"))]])
            .into_connection();

        let store = SkillStorePostgres::new(Arc::new(db));
        let skills = store.list().await.unwrap();

        assert_eq!(skills[0].data.icon, Some(SkillIcon::GitBranch));
        assert_eq!(skills[0].data.order, Some(2));
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_icon_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("s-1", Some("sparkles"))]])
            .into_connection();

        let store = SkillStorePostgres::new(Arc::new(db));
        let result = store.list().await;

        assert!(matches!(result, Err(SkillStoreError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_list_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let store = SkillStorePostgres::new(Arc::new(db));
        assert!(matches!(
            store.list().await,
            Err(SkillStoreError::Database(_))
        ));
    }
}
