use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SleepSession::Table)
                    .if_not_exists()
                    .col(pk_auto(SleepSession::Id))
                    .col(integer(SleepSession::AccountId))
                    .col(double(SleepSession::Duration))
                    .col(double(SleepSession::Quality))
                    .col(integer(SleepSession::SleepScore))
                    .col(double(SleepSession::StageLight))
                    .col(double(SleepSession::StageDeep))
                    .col(double(SleepSession::StageRem))
                    .col(json(SleepSession::SoundsDetected))
                    .col(timestamp_with_time_zone(SleepSession::Date))
                    .col(timestamp_with_time_zone(SleepSession::StartedAt))
                    .col(timestamp_with_time_zone(SleepSession::EndedAt))
                    .col(string(SleepSession::Notes))
                    .col(timestamp_with_time_zone(SleepSession::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Session history and analytics windows are always owner-scoped and
        // date-ordered.
        manager
            .create_index(
                Index::create()
                    .name("idx_sleep_session_account_date")
                    .table(SleepSession::Table)
                    .col(SleepSession::AccountId)
                    .col(SleepSession::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SleepSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SleepSession {
    Table,
    Id,
    AccountId,
    Duration,
    Quality,
    SleepScore,
    StageLight,
    StageDeep,
    StageRem,
    SoundsDetected,
    Date,
    StartedAt,
    EndedAt,
    Notes,
    CreatedAt,
}
