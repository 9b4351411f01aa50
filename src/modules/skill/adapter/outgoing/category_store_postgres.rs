use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::skill::adapter::outgoing::category_entity::{self, ActiveModel, Column, Entity};
use crate::skill::application::ports::outgoing::category_store::{
    CategoryStore, CategoryStoreError,
};
use crate::skill::domain::entities::{SkillCategory, SkillCategoryData};

#[derive(Clone)]
pub struct CategoryStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryStore for CategoryStorePostgres {
    async fn list(&self) -> Result<Vec<SkillCategory>, CategoryStoreError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_category).collect())
    }

    async fn insert(&self, data: SkillCategoryData) -> Result<SkillCategory, CategoryStoreError> {
        let id = Uuid::new_v4().to_string();

        Entity::insert(data_to_active_model(&id, &data))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(SkillCategory { id, data })
    }

    async fn replace(
        &self,
        id: &str,
        data: &SkillCategoryData,
    ) -> Result<(), CategoryStoreError> {
        let result = Entity::update_many()
            .set(data_to_active_model(id, data))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CategoryStoreError::NotFound);
        }

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), CategoryStoreError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn data_to_active_model(id: &str, data: &SkillCategoryData) -> ActiveModel {
    ActiveModel {
        id: Set(id.to_string()),
        name: Set(data.name.clone()),
        sort_order: Set(data.order),
    }
}

fn model_to_category(model: category_entity::Model) -> SkillCategory {
    SkillCategory {
        id: model.id,
        data: SkillCategoryData {
            name: model.name,
            order: model.sort_order,
        },
    }
}

fn map_db_err(e: DbErr) -> CategoryStoreError {
    CategoryStoreError::Database(e.to_string())
}
