//! Subscription plan factory for creating test plan entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::subscription_plan::PlanFeatures;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subscription plans with customizable fields.
pub struct SubscriptionPlanFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    price: f64,
    duration: String,
    features: Vec<String>,
    active: bool,
}

impl<'a> SubscriptionPlanFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Plan {}", id),
            description: "Test plan".to_string(),
            price: 9.99,
            duration: "monthly".to_string(),
            features: vec!["Advanced sleep tracking".to_string()],
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn features(mut self, features: Vec<&str>) -> Self {
        self.features = features.into_iter().map(String::from).collect();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the plan entity into the database.
    pub async fn build(self) -> Result<entity::subscription_plan::Model, DbErr> {
        let now = Utc::now();
        entity::subscription_plan::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            duration: ActiveValue::Set(self.duration),
            features: ActiveValue::Set(PlanFeatures(self.features)),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subscription plan with default values.
pub async fn create_plan(
    db: &DatabaseConnection,
) -> Result<entity::subscription_plan::Model, DbErr> {
    SubscriptionPlanFactory::new(db).build().await
}
