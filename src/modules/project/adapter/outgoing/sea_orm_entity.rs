use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// List-valued fields live in jsonb columns so the record shape stays
/// a single row per project.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text", string_len = 64)]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "Text")]
    pub image_url: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub demo_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub detailed_description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub role: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub contribution: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub additional_images: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub challenges: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub duration: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
