use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(SubscriptionPlan::Id))
                    .col(string_uniq(SubscriptionPlan::Name))
                    .col(string(SubscriptionPlan::Description))
                    .col(double(SubscriptionPlan::Price))
                    .col(string(SubscriptionPlan::Duration))
                    .col(json(SubscriptionPlan::Features))
                    .col(boolean(SubscriptionPlan::Active))
                    .col(timestamp_with_time_zone(SubscriptionPlan::CreatedAt))
                    .col(timestamp_with_time_zone(SubscriptionPlan::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubscriptionPlan {
    Table,
    Id,
    Name,
    Description,
    Price,
    Duration,
    Features,
    Active,
    CreatedAt,
    UpdatedAt,
}
