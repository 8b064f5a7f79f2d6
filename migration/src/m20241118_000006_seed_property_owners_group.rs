use sea_orm_migration::prelude::*;

use crate::m20241118_000003_create_inventory_group_table::InventoryGroup;

/// Group every self-registered account is placed into; signup refuses to run without it
static PROPERTY_OWNERS_GROUP: &str = "Property Owners";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(InventoryGroup::Table)
            .columns([InventoryGroup::Name])
            .values_panic([PROPERTY_OWNERS_GROUP.into()])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(InventoryGroup::Table)
            .and_where(Expr::col(InventoryGroup::Name).eq(PROPERTY_OWNERS_GROUP))
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
