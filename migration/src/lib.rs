pub use sea_orm_migration::prelude::*;

mod m20260310_000001_create_content_tables;
mod m20260310_000002_create_timeline_tables;
mod m20260310_000003_create_sections_and_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260310_000001_create_content_tables::Migration),
            Box::new(m20260310_000002_create_timeline_tables::Migration),
            Box::new(m20260310_000003_create_sections_and_messages::Migration),
        ]
    }
}
