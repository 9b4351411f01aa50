use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::timeline::adapter::outgoing::education_entity::{self, ActiveModel, Column, Entity};
use crate::timeline::application::ports::outgoing::education_store::{
    EducationStore, EducationStoreError,
};
use crate::timeline::domain::entities::{Education, EducationData};

#[derive(Clone)]
pub struct EducationStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationStore for EducationStorePostgres {
    async fn list(&self) -> Result<Vec<Education>, EducationStoreError> {
        let rows = Entity::find().all(&*self.db).await.map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_education).collect())
    }

    async fn insert(&self, data: EducationData) -> Result<Education, EducationStoreError> {
        let id = Uuid::new_v4().to_string();

        Entity::insert(data_to_active_model(&id, &data))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Education { id, data })
    }

    async fn replace(&self, id: &str, data: &EducationData) -> Result<(), EducationStoreError> {
        let result = Entity::update_many()
            .set(data_to_active_model(id, data))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationStoreError::NotFound);
        }

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), EducationStoreError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn data_to_active_model(id: &str, data: &EducationData) -> ActiveModel {
    ActiveModel {
        id: Set(id.to_string()),
        institution: Set(data.institution.clone()),
        degree: Set(data.degree.clone()),
        field: Set(data.field.clone()),
        start_date: Set(data.start_date),
        end_date: Set(data.end_date),
        description: Set(data.description.clone()),
        location: Set(data.location.clone()),
        logo_url: Set(data.logo_url.clone()),
    }
}

fn model_to_education(model: education_entity::Model) -> Education {
    Education {
        id: model.id,
        data: EducationData {
            institution: model.institution,
            degree: model.degree,
            field: model.field,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
            location: model.location,
            logo_url: model.logo_url,
        },
    }
}

fn map_db_err(e: DbErr) -> EducationStoreError {
    EducationStoreError::Database(e.to_string())
}
