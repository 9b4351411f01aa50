use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::timeline::adapter::outgoing::experience_entity::{self, ActiveModel, Column, Entity};
use crate::timeline::application::ports::outgoing::experience_store::{
    ExperienceStore, ExperienceStoreError,
};
use crate::timeline::domain::entities::{Experience, ExperienceData};

#[derive(Clone)]
pub struct ExperienceStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceStore for ExperienceStorePostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceStoreError> {
        // Display order is applied in the use case (None end dates
        // sort first, which SQL NULL ordering gets wrong by default).
        let rows = Entity::find().all(&*self.db).await.map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_experience).collect())
    }

    async fn insert(&self, data: ExperienceData) -> Result<Experience, ExperienceStoreError> {
        let id = Uuid::new_v4().to_string();

        Entity::insert(data_to_active_model(&id, &data))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Experience { id, data })
    }

    async fn replace(&self, id: &str, data: &ExperienceData) -> Result<(), ExperienceStoreError> {
        let result = Entity::update_many()
            .set(data_to_active_model(id, data))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceStoreError::NotFound);
        }

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), ExperienceStoreError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn data_to_active_model(id: &str, data: &ExperienceData) -> ActiveModel {
    ActiveModel {
        id: Set(id.to_string()),
        company: Set(data.company.clone()),
        position: Set(data.position.clone()),
        start_date: Set(data.start_date),
        end_date: Set(data.end_date),
        description: Set(data.description.clone()),
        location: Set(data.location.clone()),
    }
}

fn model_to_experience(model: experience_entity::Model) -> Experience {
    Experience {
        id: model.id,
        data: ExperienceData {
            company: model.company,
            position: model.position,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
            location: model.location,
        },
    }
}

fn map_db_err(e: DbErr) -> ExperienceStoreError {
    ExperienceStoreError::Database(e.to_string())
}
