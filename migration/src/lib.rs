pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_account_table;
mod m20260105_000002_create_sleep_session_table;
mod m20260105_000003_create_sound_asset_table;
mod m20260105_000004_create_subscription_plan_table;
mod m20260105_000005_create_gift_code_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_account_table::Migration),
            Box::new(m20260105_000002_create_sleep_session_table::Migration),
            Box::new(m20260105_000003_create_sound_asset_table::Migration),
            Box::new(m20260105_000004_create_subscription_plan_table::Migration),
            Box::new(m20260105_000005_create_gift_code_table::Migration),
        ]
    }
}
