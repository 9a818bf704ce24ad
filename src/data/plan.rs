//! Subscription plan data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::plan::{CreatePlanRecord, Plan, UpdatePlanParams};

/// Repository providing database operations for subscription plans.
pub struct PlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new subscription plan.
    ///
    /// # Arguments
    /// - `record` - Plan row with defaults already applied by the service
    ///
    /// # Returns
    /// - `Ok(Plan)` - The created plan
    /// - `Err(DbErr)` - Database error during insert (including unique name violations)
    pub async fn create(&self, record: CreatePlanRecord) -> Result<Plan, DbErr> {
        let now = Utc::now();
        let entity = entity::subscription_plan::ActiveModel {
            name: ActiveValue::Set(record.name),
            description: ActiveValue::Set(record.description),
            price: ActiveValue::Set(record.price),
            duration: ActiveValue::Set(record.duration),
            features: ActiveValue::Set(entity::subscription_plan::PlanFeatures(record.features)),
            active: ActiveValue::Set(record.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Plan::from_entity(entity))
    }

    /// Finds a plan by its primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Plan>, DbErr> {
        let entity = entity::prelude::SubscriptionPlan::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Plan::from_entity))
    }

    /// Checks whether a plan with the given name already exists.
    ///
    /// Pre-check for the friendly 409; the unique index on name closes the
    /// concurrent-writer race.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SubscriptionPlan::find()
            .filter(entity::subscription_plan::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all active plans ordered by price ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<Plan>)` - Active plans, cheapest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_active(&self) -> Result<Vec<Plan>, DbErr> {
        let entities = entity::prelude::SubscriptionPlan::find()
            .filter(entity::subscription_plan::Column::Active.eq(true))
            .order_by_asc(entity::subscription_plan::Column::Price)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Plan::from_entity).collect())
    }

    /// Counts all active plans.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::SubscriptionPlan::find()
            .filter(entity::subscription_plan::Column::Active.eq(true))
            .count(self.db)
            .await
    }

    /// Applies a partial update to a plan.
    ///
    /// Only the provided fields are written; omitted fields keep their stored
    /// values. The updated-at timestamp is always refreshed.
    ///
    /// # Arguments
    /// - `id` - Plan id to update
    /// - `param` - Partial update with `None` for untouched fields
    ///
    /// # Returns
    /// - `Ok(Some(Plan))` - The updated plan
    /// - `Ok(None)` - No plan with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: UpdatePlanParams) -> Result<Option<Plan>, DbErr> {
        let Some(existing) = entity::prelude::SubscriptionPlan::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();

        if let Some(name) = param.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            model.description = ActiveValue::Set(description);
        }
        if let Some(price) = param.price {
            model.price = ActiveValue::Set(price);
        }
        if let Some(duration) = param.duration {
            model.duration = ActiveValue::Set(duration);
        }
        if let Some(features) = param.features {
            model.features = ActiveValue::Set(entity::subscription_plan::PlanFeatures(features));
        }
        if let Some(active) = param.active {
            model.active = ActiveValue::Set(active);
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        let entity = model.update(self.db).await?;

        Ok(Some(Plan::from_entity(entity)))
    }
}
