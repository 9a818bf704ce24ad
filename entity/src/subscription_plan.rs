//! Subscription plan entity model.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Marketing feature list for a plan, stored as a JSON array of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct PlanFeatures(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subscription_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Billing duration tag, e.g. `monthly` or `yearly`.
    pub duration: String,
    #[sea_orm(column_type = "Json")]
    pub features: PlanFeatures,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
