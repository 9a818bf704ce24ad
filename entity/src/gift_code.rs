//! Gift code entity model.
//!
//! `plan_name` is a display snapshot taken at creation time and is
//! deliberately not kept in sync with later plan renames. The
//! `used_count`/`max_uses` pair is advisory metadata: no redemption path
//! increments it.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gift_code")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    /// Referenced subscription plan, validated to exist at creation time.
    pub plan_id: i32,
    pub plan_name: String,
    /// `None` means the code never expires.
    pub expires_at: Option<DateTimeUtc>,
    pub max_uses: i32,
    pub used_count: i32,
    pub description: String,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
