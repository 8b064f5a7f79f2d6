use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241118_000004_create_accommodation_table::Accommodation;

static IDX_LOCALIZE_ACCOMMODATION_ACCOMMODATION_ID: &str =
    "idx_localize_accommodation_accommodation_id";
static FK_LOCALIZE_ACCOMMODATION_ACCOMMODATION_ID: &str =
    "fk_localize_accommodation_accommodation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LocalizeAccommodation::Table)
                    .if_not_exists()
                    .col(pk_auto(LocalizeAccommodation::Id))
                    .col(string_len(LocalizeAccommodation::AccommodationId, 20))
                    .col(string_len(LocalizeAccommodation::Language, 2))
                    .col(text(LocalizeAccommodation::Description))
                    .col(json(LocalizeAccommodation::Policy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LOCALIZE_ACCOMMODATION_ACCOMMODATION_ID)
                    .table(LocalizeAccommodation::Table)
                    .col(LocalizeAccommodation::AccommodationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOCALIZE_ACCOMMODATION_ACCOMMODATION_ID)
                    .from_tbl(LocalizeAccommodation::Table)
                    .from_col(LocalizeAccommodation::AccommodationId)
                    .to_tbl(Accommodation::Table)
                    .to_col(Accommodation::Id)
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
                    .name(FK_LOCALIZE_ACCOMMODATION_ACCOMMODATION_ID)
                    .table(LocalizeAccommodation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LOCALIZE_ACCOMMODATION_ACCOMMODATION_ID)
                    .table(LocalizeAccommodation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LocalizeAccommodation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LocalizeAccommodation {
    Table,
    Id,
    AccommodationId,
    Language,
    Description,
    Policy,
}
