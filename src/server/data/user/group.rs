use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect, RelationTrait,
};

use crate::server::model::db::GroupModel;

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new instance of [`GroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<GroupModel, DbErr> {
        let group = entity::inventory_group::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        group.insert(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<GroupModel>, DbErr> {
        entity::prelude::InventoryGroup::find()
            .filter(entity::inventory_group::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn add_member(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<entity::inventory_user_group::Model, DbErr> {
        let membership = entity::inventory_user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
            ..Default::default()
        };

        membership.insert(self.db).await
    }

    /// Whether the user belongs to the group with the provided name
    pub async fn is_member(&self, user_id: i32, group_name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::InventoryUserGroup::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::inventory_user_group::Relation::InventoryGroup.def(),
            )
            .filter(entity::inventory_user_group::Column::UserId.eq(user_id))
            .filter(entity::inventory_group::Column::Name.eq(group_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
