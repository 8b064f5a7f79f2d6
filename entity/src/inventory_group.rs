use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(150))", unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inventory_user_group::Entity")]
    InventoryUserGroup,
}

impl Related<super::inventory_user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryUserGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
