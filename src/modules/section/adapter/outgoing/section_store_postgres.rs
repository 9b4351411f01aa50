use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::section::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Entity};
use crate::section::application::ports::outgoing::section_store::{
    SectionStore, SectionStoreError,
};
use crate::section::domain::entities::{Section, SectionData};

#[derive(Clone)]
pub struct SectionStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SectionStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SectionStore for SectionStorePostgres {
    async fn list(&self) -> Result<Vec<Section>, SectionStoreError> {
        let rows = Entity::find()
            .order_by_asc(sea_orm_entity::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_section).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Section>, SectionStoreError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_section))
    }

    async fn upsert(&self, id: &str, data: &SectionData) -> Result<(), SectionStoreError> {
        let model = ActiveModel {
            id: Set(id.to_string()),
            name: Set(data.name.clone()),
            visible: Set(data.visible),
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::column(sea_orm_entity::Column::Id)
                    .update_columns([
                        sea_orm_entity::Column::Name,
                        sea_orm_entity::Column::Visible,
                    ])
                    .to_owned(),
            )
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_section(model: sea_orm_entity::Model) -> Section {
    Section {
        id: model.id,
        data: SectionData {
            name: model.name,
            visible: model.visible,
        },
    }
}

fn map_db_err(e: DbErr) -> SectionStoreError {
    SectionStoreError::Database(e.to_string())
}
