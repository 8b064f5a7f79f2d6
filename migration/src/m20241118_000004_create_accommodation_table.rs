use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20241118_000001_create_location_table::Location,
    m20241118_000002_create_inventory_user_table::InventoryUser,
};

static IDX_ACCOMMODATION_LOCATION_ID: &str = "idx_accommodation_location_id";
static IDX_ACCOMMODATION_USER_ID: &str = "idx_accommodation_user_id";
static FK_ACCOMMODATION_LOCATION_ID: &str = "fk_accommodation_location_id";
static FK_ACCOMMODATION_USER_ID: &str = "fk_accommodation_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodation::Table)
                    .if_not_exists()
                    .col(string_len(Accommodation::Id, 20).primary_key())
                    .col(small_integer(Accommodation::Feed).default(0))
                    .col(string_len(Accommodation::Title, 100))
                    .col(string_len(Accommodation::CountryCode, 2))
                    .col(small_integer_null(Accommodation::BedroomCount))
                    .col(decimal_len(Accommodation::ReviewScore, 3, 1).default(0))
                    .col(decimal_len(Accommodation::UsdRate, 10, 2))
                    .col(double(Accommodation::Latitude))
                    .col(double(Accommodation::Longitude))
                    .col(json(Accommodation::Images))
                    .col(json(Accommodation::Amenities))
                    .col(boolean(Accommodation::Published).default(false))
                    .col(string_len(Accommodation::LocationId, 20))
                    .col(integer_null(Accommodation::UserId))
                    .col(timestamp(Accommodation::CreatedAt))
                    .col(timestamp(Accommodation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOMMODATION_LOCATION_ID)
                    .table(Accommodation::Table)
                    .col(Accommodation::LocationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOMMODATION_USER_ID)
                    .table(Accommodation::Table)
                    .col(Accommodation::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACCOMMODATION_LOCATION_ID)
                    .from_tbl(Accommodation::Table)
                    .from_col(Accommodation::LocationId)
                    .to_tbl(Location::Table)
                    .to_col(Location::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACCOMMODATION_USER_ID)
                    .from_tbl(Accommodation::Table)
                    .from_col(Accommodation::UserId)
                    .to_tbl(InventoryUser::Table)
                    .to_col(InventoryUser::Id)
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
                    .name(FK_ACCOMMODATION_USER_ID)
                    .table(Accommodation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ACCOMMODATION_LOCATION_ID)
                    .table(Accommodation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOMMODATION_USER_ID)
                    .table(Accommodation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOMMODATION_LOCATION_ID)
                    .table(Accommodation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Accommodation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Accommodation {
    Table,
    Id,
    Feed,
    Title,
    CountryCode,
    BedroomCount,
    ReviewScore,
    UsdRate,
    Latitude,
    Longitude,
    Images,
    Amenities,
    Published,
    LocationId,
    UserId,
    CreatedAt,
    UpdatedAt,
}
