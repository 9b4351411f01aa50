use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::profile::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Entity};
use crate::profile::application::ports::outgoing::profile_store::{
    ProfileStore, ProfileStoreError,
};
use crate::profile::domain::entities::Profile;

const PROFILE_ROW_ID: &str = "main";

#[derive(Clone)]
pub struct ProfileStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for ProfileStorePostgres {
    async fn get(&self) -> Result<Option<Profile>, ProfileStoreError> {
        let row = Entity::find_by_id(PROFILE_ROW_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_profile))
    }

    async fn put(&self, profile: &Profile) -> Result<(), ProfileStoreError> {
        let model = ActiveModel {
            id: Set(PROFILE_ROW_ID.to_string()),
            name: Set(profile.name.clone()),
            title: Set(profile.title.clone()),
            bio: Set(profile.bio.clone()),
            email: Set(profile.email.clone()),
            phone: Set(profile.phone.clone()),
            location: Set(profile.location.clone()),
            github: Set(profile.github.clone()),
            linkedin: Set(profile.linkedin.clone()),
            website: Set(profile.website.clone()),
            image_url: Set(profile.image_url.clone()),
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::column(sea_orm_entity::Column::Id)
                    .update_columns([
                        sea_orm_entity::Column::Name,
                        sea_orm_entity::Column::Title,
                        sea_orm_entity::Column::Bio,
                        sea_orm_entity::Column::Email,
                        sea_orm_entity::Column::Phone,
                        sea_orm_entity::Column::Location,
                        sea_orm_entity::Column::Github,
                        sea_orm_entity::Column::Linkedin,
                        sea_orm_entity::Column::Website,
                        sea_orm_entity::Column::ImageUrl,
                    ])
                    .to_owned(),
            )
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_profile(model: sea_orm_entity::Model) -> Profile {
    Profile {
        name: model.name,
        title: model.title,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        location: model.location,
        github: model.github,
        linkedin: model.linkedin,
        website: model.website,
        image_url: model.image_url,
    }
}

fn map_db_err(e: DbErr) -> ProfileStoreError {
    ProfileStoreError::Database(e.to_string())
}
