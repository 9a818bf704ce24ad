use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string(Account::Name))
                    .col(string_uniq(Account::Email))
                    .col(string(Account::PasswordHash))
                    .col(string(Account::Subscription))
                    .col(integer(Account::SleepSessionsCount))
                    .col(double(Account::TotalSleepHours))
                    .col(timestamp_with_time_zone(Account::LastLoginAt))
                    .col(timestamp_with_time_zone(Account::CreatedAt))
                    .col(timestamp_with_time_zone(Account::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Subscription,
    SleepSessionsCount,
    TotalSleepHours,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}
