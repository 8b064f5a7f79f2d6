use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Level of a location within the continent → country → state → city hierarchy.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    #[sea_orm(string_value = "continent")]
    Continent,
    #[sea_orm(string_value = "country")]
    Country,
    #[sea_orm(string_value = "state")]
    State,
    #[default]
    #[sea_orm(string_value = "city")]
    City,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_type = "String(StringLen::N(20))"
    )]
    pub id: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable, indexed)]
    pub parent_id: Option<String>,
    pub location_type: LocationType,
    #[sea_orm(column_type = "String(StringLen::N(2))", nullable)]
    pub country_code: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub state_abbr: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub city: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Parent,
    #[sea_orm(has_many = "super::accommodation::Entity")]
    Accommodation,
}

impl Related<super::accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accommodation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}
