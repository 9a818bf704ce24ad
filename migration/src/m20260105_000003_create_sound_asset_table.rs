use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SoundAsset::Table)
                    .if_not_exists()
                    .col(pk_auto(SoundAsset::Id))
                    .col(string(SoundAsset::Name))
                    .col(string(SoundAsset::Category))
                    .col(string(SoundAsset::FilePath))
                    .col(boolean(SoundAsset::Premium))
                    .col(integer(SoundAsset::DurationSecs))
                    .col(integer(SoundAsset::PlayCount))
                    .col(integer(SoundAsset::LikeCount))
                    .col(boolean(SoundAsset::Active))
                    .col(timestamp_with_time_zone(SoundAsset::CreatedAt))
                    .col(timestamp_with_time_zone(SoundAsset::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sound_asset_category_premium")
                    .table(SoundAsset::Table)
                    .col(SoundAsset::Category)
                    .col(SoundAsset::Premium)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SoundAsset::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SoundAsset {
    Table,
    Id,
    Name,
    Category,
    FilePath,
    Premium,
    DurationSecs,
    PlayCount,
    LikeCount,
    Active,
    CreatedAt,
    UpdatedAt,
}
