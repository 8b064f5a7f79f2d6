use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241118_000002_create_inventory_user_table::InventoryUser;

static IDX_USER_GROUP_USER_ID: &str = "idx_inventory_user_group_user_id";
static IDX_USER_GROUP_UNIQUE_MEMBERSHIP: &str = "idx_inventory_user_group_unique_membership";
static FK_USER_GROUP_USER_ID: &str = "fk_inventory_user_group_user_id";
static FK_USER_GROUP_GROUP_ID: &str = "fk_inventory_user_group_group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryGroup::Id))
                    .col(string_len_uniq(InventoryGroup::Name, 150))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryUserGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryUserGroup::Id))
                    .col(integer(InventoryUserGroup::UserId))
                    .col(integer(InventoryUserGroup::GroupId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_GROUP_USER_ID)
                    .table(InventoryUserGroup::Table)
                    .col(InventoryUserGroup::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_GROUP_UNIQUE_MEMBERSHIP)
                    .table(InventoryUserGroup::Table)
                    .col(InventoryUserGroup::UserId)
                    .col(InventoryUserGroup::GroupId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_GROUP_USER_ID)
                    .from_tbl(InventoryUserGroup::Table)
                    .from_col(InventoryUserGroup::UserId)
                    .to_tbl(InventoryUser::Table)
                    .to_col(InventoryUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_GROUP_GROUP_ID)
                    .from_tbl(InventoryUserGroup::Table)
                    .from_col(InventoryUserGroup::GroupId)
                    .to_tbl(InventoryGroup::Table)
                    .to_col(InventoryGroup::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_GROUP_GROUP_ID)
                    .table(InventoryUserGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_GROUP_USER_ID)
                    .table(InventoryUserGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_GROUP_UNIQUE_MEMBERSHIP)
                    .table(InventoryUserGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_GROUP_USER_ID)
                    .table(InventoryUserGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryUserGroup::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryGroup {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum InventoryUserGroup {
    Table,
    Id,
    UserId,
    GroupId,
}
