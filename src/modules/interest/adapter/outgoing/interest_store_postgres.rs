use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::interest::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::interest::application::ports::outgoing::interest_store::{
    InterestStore, InterestStoreError,
};
use crate::interest::domain::entities::{Interest, InterestData};

#[derive(Clone)]
pub struct InterestStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl InterestStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InterestStore for InterestStorePostgres {
    async fn list(&self) -> Result<Vec<Interest>, InterestStoreError> {
        let rows = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_interest).collect())
    }

    async fn insert(&self, data: InterestData) -> Result<Interest, InterestStoreError> {
        let id = Uuid::new_v4().to_string();

        Entity::insert(data_to_active_model(&id, &data))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Interest { id, data })
    }

    async fn replace(&self, id: &str, data: &InterestData) -> Result<(), InterestStoreError> {
        let result = Entity::update_many()
            .set(data_to_active_model(id, data))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(InterestStoreError::NotFound);
        }

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), InterestStoreError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn data_to_active_model(id: &str, data: &InterestData) -> ActiveModel {
    ActiveModel {
        id: Set(id.to_string()),
        name: Set(data.name.clone()),
        description: Set(data.description.clone()),
        icon: Set(data.icon.clone()),
    }
}

fn model_to_interest(model: sea_orm_entity::Model) -> Interest {
    Interest {
        id: model.id,
        data: InterestData {
            name: model.name,
            description: model.description,
            icon: model.icon,
        },
    }
}

fn map_db_err(e: DbErr) -> InterestStoreError {
    InterestStoreError::Database(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sea_orm_entity::Model {
                id: "i-1".to_string(),
                name: "Chess".to_string(),
                description: "Playing chess.".to_string(),
                icon: "♟️".to_string(),
            }]])
            .into_connection();

        let store = InterestStorePostgres::new(Arc::new(db));
        let interests = store.list().await.unwrap();

        assert_eq!(interests[0].data.icon, "♟️");
    }

    #[tokio::test]
    async fn test_list_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let store = InterestStorePostgres::new(Arc::new(db));
        assert!(matches!(
            store.list().await,
            Err(InterestStoreError::Database(_))
        ));
    }
}
