//! Sleep session entity model.
//!
//! Sessions are immutable after creation: there is no update or delete path.
//! The `account_id` reference is maintained by the caller, not by a database
//! foreign key, matching the document-store origins of the schema.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Free-text sound labels detected during a session, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SoundLabels(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sleep_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i32,
    /// Sleep duration in hours. Always greater than zero.
    pub duration: f64,
    /// Quality score in the 0-100 range.
    pub quality: f64,
    /// Derived score: `floor(quality / 10)`.
    pub sleep_score: i32,
    pub stage_light: f64,
    pub stage_deep: f64,
    pub stage_rem: f64,
    #[sea_orm(column_type = "Json")]
    pub sounds_detected: SoundLabels,
    pub date: DateTimeUtc,
    pub started_at: DateTimeUtc,
    pub ended_at: DateTimeUtc,
    pub notes: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
