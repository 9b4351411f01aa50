use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skill_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text", string_len = 64)]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
