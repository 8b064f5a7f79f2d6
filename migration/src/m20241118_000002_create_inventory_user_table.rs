use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryUser::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryUser::Id))
                    .col(string_len_uniq(InventoryUser::Username, 150))
                    .col(string_len(InventoryUser::Email, 254))
                    .col(string(InventoryUser::PasswordHash))
                    .col(boolean(InventoryUser::IsActive).default(false))
                    .col(boolean(InventoryUser::IsStaff).default(false))
                    .col(boolean(InventoryUser::IsSuperuser).default(false))
                    .col(timestamp(InventoryUser::CreatedAt))
                    .col(timestamp_null(InventoryUser::LastLogin))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryUser {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    IsActive,
    IsStaff,
    IsSuperuser,
    CreatedAt,
    LastLogin,
}
