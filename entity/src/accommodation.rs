use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accommodation")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_type = "String(StringLen::N(20))"
    )]
    pub id: String,
    #[sea_orm(default_value = 0)]
    pub feed: i16,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub title: String,
    #[sea_orm(column_type = "String(StringLen::N(2))")]
    pub country_code: String,
    #[sea_orm(nullable)]
    pub bedroom_count: Option<i16>,
    #[sea_orm(column_type = "Decimal(Some((3, 1)))")]
    pub review_score: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub usd_rate: Decimal,
    pub latitude: f64,
    pub longitude: f64,
    /// Ordered list of image URLs
    #[sea_orm(column_type = "Json")]
    pub images: Json,
    /// List of amenity tags
    #[sea_orm(column_type = "Json")]
    pub amenities: Json,
    #[sea_orm(default_value = false)]
    pub published: bool,
    #[sea_orm(column_type = "String(StringLen::N(20))", indexed)]
    pub location_id: String,
    #[sea_orm(nullable, indexed)]
    pub user_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::inventory_user::Entity",
        from = "Column::UserId",
        to = "super::inventory_user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    InventoryUser,
    #[sea_orm(has_many = "super::localize_accommodation::Entity")]
    LocalizeAccommodation,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::inventory_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryUser.def()
    }
}

impl Related<super::localize_accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocalizeAccommodation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}
