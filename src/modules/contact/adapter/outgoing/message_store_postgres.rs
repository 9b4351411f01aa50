use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::contact::adapter::outgoing::sea_orm_entity::ActiveModel;
use crate::contact::adapter::outgoing::sea_orm_entity::Entity;
use crate::contact::application::ports::outgoing::message_store::{
    MessageStore, MessageStoreError,
};
use crate::contact::domain::entities::{ContactMessage, ContactMessageData};

#[derive(Clone)]
pub struct MessageStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageStore for MessageStorePostgres {
    async fn insert(
        &self,
        data: ContactMessageData,
    ) -> Result<ContactMessage, MessageStoreError> {
        let id = Uuid::new_v4().to_string();

        let model = ActiveModel {
            id: Set(id.clone()),
            name: Set(data.name.clone()),
            email: Set(data.email.clone()),
            subject: Set(data.subject.clone()),
            message: Set(data.message.clone()),
            created_at: Set(data.created_at),
            read: Set(data.read),
        };

        Entity::insert(model)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ContactMessage { id, data })
    }
}

fn map_db_err(e: DbErr) -> MessageStoreError {
    MessageStoreError::Database(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn data() -> ContactMessageData {
        ContactMessageData {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
            created_at: Utc::now(),
            read: false,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = MessageStorePostgres::new(Arc::new(db));
        let stored = store.insert(data()).await.unwrap();

        assert!(Uuid::parse_str(&stored.id).is_ok());
        assert_eq!(stored.data.subject, "Hello");
    }

    #[tokio::test]
    async fn test_insert_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let store = MessageStorePostgres::new(Arc::new(db));
        assert!(matches!(
            store.insert(data()).await,
            Err(MessageStoreError::Database(_))
        ));
    }
}
