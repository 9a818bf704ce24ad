use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GiftCode::Table)
                    .if_not_exists()
                    .col(pk_auto(GiftCode::Id))
                    .col(string_uniq(GiftCode::Code))
                    .col(integer(GiftCode::PlanId))
                    .col(string(GiftCode::PlanName))
                    .col(timestamp_with_time_zone_null(GiftCode::ExpiresAt))
                    .col(integer(GiftCode::MaxUses))
                    .col(integer(GiftCode::UsedCount))
                    .col(string(GiftCode::Description))
                    .col(boolean(GiftCode::Active))
                    .col(timestamp_with_time_zone(GiftCode::CreatedAt))
                    .col(timestamp_with_time_zone(GiftCode::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GiftCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GiftCode {
    Table,
    Id,
    Code,
    PlanId,
    PlanName,
    ExpiresAt,
    MaxUses,
    UsedCount,
    Description,
    Active,
    CreatedAt,
    UpdatedAt,
}
