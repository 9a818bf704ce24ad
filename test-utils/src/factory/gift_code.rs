//! Gift code factory for creating test gift code entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test gift codes with customizable fields.
pub struct GiftCodeFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    plan_id: i32,
    plan_name: String,
    expires_at: Option<chrono::DateTime<Utc>>,
    max_uses: i32,
    used_count: i32,
    active: bool,
}

impl<'a> GiftCodeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("GIFT-{}", id),
            plan_id: 1,
            plan_name: "Premium".to_string(),
            expires_at: None,
            max_uses: 1,
            used_count: 0,
            active: true,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn plan_id(mut self, plan_id: i32) -> Self {
        self.plan_id = plan_id;
        self
    }

    pub fn plan_name(mut self, plan_name: impl Into<String>) -> Self {
        self.plan_name = plan_name.into();
        self
    }

    pub fn expires_at(mut self, expires_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn max_uses(mut self, max_uses: i32) -> Self {
        self.max_uses = max_uses;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the gift code entity into the database.
    pub async fn build(self) -> Result<entity::gift_code::Model, DbErr> {
        let now = Utc::now();
        entity::gift_code::ActiveModel {
            code: ActiveValue::Set(self.code),
            plan_id: ActiveValue::Set(self.plan_id),
            plan_name: ActiveValue::Set(self.plan_name),
            expires_at: ActiveValue::Set(self.expires_at),
            max_uses: ActiveValue::Set(self.max_uses),
            used_count: ActiveValue::Set(self.used_count),
            description: ActiveValue::Set(String::new()),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gift code with default values.
pub async fn create_gift_code(db: &DatabaseConnection) -> Result<entity::gift_code::Model, DbErr> {
    GiftCodeFactory::new(db).build().await
}
