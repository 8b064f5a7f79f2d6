use sea_orm_migration::{prelude::*, schema::*};

static IDX_LOCATION_PARENT_ID: &str = "idx_location_parent_id";
static IDX_LOCATION_LOCATION_TYPE: &str = "idx_location_location_type";
static FK_LOCATION_PARENT_ID: &str = "fk_location_parent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(string_len(Location::Id, 20).primary_key())
                    .col(string_len(Location::Title, 100))
                    .col(double(Location::Latitude))
                    .col(double(Location::Longitude))
                    .col(string_len_null(Location::ParentId, 20))
                    .col(string_len(Location::LocationType, 20).default("city"))
                    .col(string_len_null(Location::CountryCode, 2))
                    .col(string_len_null(Location::StateAbbr, 3))
                    .col(string_len_null(Location::City, 30))
                    .col(timestamp(Location::CreatedAt))
                    .col(timestamp(Location::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LOCATION_PARENT_ID)
                    .table(Location::Table)
                    .col(Location::ParentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LOCATION_LOCATION_TYPE)
                    .table(Location::Table)
                    .col(Location::LocationType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOCATION_PARENT_ID)
                    .from_tbl(Location::Table)
                    .from_col(Location::ParentId)
                    .to_tbl(Location::Table)
                    .to_col(Location::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LOCATION_PARENT_ID)
                    .table(Location::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LOCATION_LOCATION_TYPE)
                    .table(Location::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LOCATION_PARENT_ID)
                    .table(Location::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    Title,
    Latitude,
    Longitude,
    ParentId,
    LocationType,
    CountryCode,
    StateAbbr,
    City,
    CreatedAt,
    UpdatedAt,
}
