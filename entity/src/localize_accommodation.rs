use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Languages an accommodation description can be localized into.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[sea_orm(string_value = "en")]
    En,
    #[sea_orm(string_value = "es")]
    Es,
    #[sea_orm(string_value = "fr")]
    Fr,
    #[sea_orm(string_value = "de")]
    De,
    #[sea_orm(string_value = "it")]
    It,
    #[sea_orm(string_value = "pt")]
    Pt,
    #[sea_orm(string_value = "ru")]
    Ru,
    #[sea_orm(string_value = "zh")]
    Zh,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "localize_accommodation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(20))", indexed)]
    pub accommodation_id: String,
    pub language: Language,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Key-value mapping of house rules such as check-in and check-out times
    #[sea_orm(column_type = "Json")]
    pub policy: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accommodation::Entity",
        from = "Column::AccommodationId",
        to = "super::accommodation::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Accommodation,
}

impl Related<super::accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accommodation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
