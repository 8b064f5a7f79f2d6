use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_user_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: i32,
    pub group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory_user::Entity",
        from = "Column::UserId",
        to = "super::inventory_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    InventoryUser,
    #[sea_orm(
        belongs_to = "super::inventory_group::Entity",
        from = "Column::GroupId",
        to = "super::inventory_group::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    InventoryGroup,
}

impl Related<super::inventory_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryUser.def()
    }
}

impl Related<super::inventory_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
