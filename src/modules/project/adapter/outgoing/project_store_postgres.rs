use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::project::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::project::application::ports::outgoing::project_store::{
    ProjectStore, ProjectStoreError,
};
use crate::project::domain::entities::{Project, ProjectData};

#[derive(Clone)]
pub struct ProjectStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectStore for ProjectStorePostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectStoreError> {
        let rows = Entity::find()
            .order_by_asc(Column::Title)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_project).collect()
    }

    async fn get(&self, id: &str) -> Result<Project, ProjectStoreError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectStoreError::NotFound)?;

        model_to_project(row)
    }

    async fn insert(&self, data: ProjectData) -> Result<Project, ProjectStoreError> {
        let id = Uuid::new_v4().to_string();
        let model = data_to_active_model(&id, &data);

        Entity::insert(model)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Project { id, data })
    }

    async fn replace(&self, id: &str, data: &ProjectData) -> Result<(), ProjectStoreError> {
        let model = data_to_active_model(id, data);

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectStoreError::NotFound);
        }

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), ProjectStoreError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn data_to_active_model(id: &str, data: &ProjectData) -> ActiveModel {
    ActiveModel {
        id: Set(id.to_string()),
        title: Set(data.title.clone()),
        description: Set(data.description.clone()),
        technologies: Set(to_json(&data.technologies)),
        image_url: Set(data.image_url.clone()),
        demo_url: Set(data.demo_url.clone()),
        github_url: Set(data.github_url.clone()),
        detailed_description: Set(data.detailed_description.clone()),
        role: Set(data.role.clone()),
        contribution: Set(data.contribution.clone()),
        additional_images: Set(to_json(&data.additional_images)),
        features: Set(to_json(&data.features)),
        challenges: Set(data.challenges.clone()),
        duration: Set(data.duration.clone()),
    }
}

fn model_to_project(model: sea_orm_entity::Model) -> Result<Project, ProjectStoreError> {
    Ok(Project {
        id: model.id,
        data: ProjectData {
            title: model.title,
            description: model.description,
            technologies: from_json(model.technologies)?,
            image_url: model.image_url,
            demo_url: model.demo_url,
            github_url: model.github_url,
            detailed_description: model.detailed_description,
            role: model.role,
            contribution: model.contribution,
            additional_images: from_json(model.additional_images)?,
            features: from_json(model.features)?,
            challenges: model.challenges,
            duration: model.duration,
        },
    })
}

fn to_json(values: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        values
            .iter()
            .map(|v| serde_json::Value::String(v.clone()))
            .collect(),
    )
}

fn from_json(value: serde_json::Value) -> Result<Vec<String>, ProjectStoreError> {
    serde_json::from_value(value).map_err(|e| ProjectStoreError::Serialization(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectStoreError {
    ProjectStoreError::Database(e.to_string())
}
