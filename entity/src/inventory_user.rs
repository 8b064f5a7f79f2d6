use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(150))", unique)]
    pub username: String,
    #[sea_orm(column_type = "String(StringLen::N(254))")]
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: DateTime,
    #[sea_orm(nullable)]
    pub last_login: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::accommodation::Entity")]
    Accommodation,
    #[sea_orm(has_many = "super::inventory_user_group::Entity")]
    InventoryUserGroup,
}

impl Related<super::accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accommodation.def()
    }
}

impl Related<super::inventory_user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryUserGroup.def()
    }
}

impl Related<super::inventory_group::Entity> for Entity {
    fn to() -> RelationDef {
        super::inventory_user_group::Relation::InventoryGroup.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::inventory_user_group::Relation::InventoryUser.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
