//! Subscription plan service.

use sea_orm::DatabaseConnection;

use crate::{
    data::plan::PlanRepository,
    error::AppError,
    model::plan::{CreatePlanParams, CreatePlanRecord, Plan, UpdatePlanParams},
};

/// Service providing business logic for subscription plan management.
pub struct PlanService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    /// Creates a new PlanService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlanService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active plans, cheapest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Plan>)` - Active plans ordered by price ascending
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_active(&self) -> Result<Vec<Plan>, AppError> {
        let plans = PlanRepository::new(self.db).list_active().await?;

        Ok(plans)
    }

    /// Creates a subscription plan.
    ///
    /// Name, price, and duration are required and the price must be
    /// non-negative. Plan names are unique across the catalog.
    ///
    /// # Arguments
    /// - `param` - Raw plan fields from the request body
    ///
    /// # Returns
    /// - `Ok(Plan)` - The stored plan
    /// - `Err(AppError::Validation)` - Missing fields or negative price
    /// - `Err(AppError::Conflict)` - A plan with this name already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePlanParams) -> Result<Plan, AppError> {
        let (Some(name), Some(price), Some(duration)) = (param.name, param.price, param.duration)
        else {
            return Err(AppError::Validation(
                "Name, price, and duration are required".to_string(),
            ));
        };
        if name.is_empty() || duration.is_empty() {
            return Err(AppError::Validation(
                "Name, price, and duration are required".to_string(),
            ));
        }

        if price < 0.0 {
            return Err(AppError::Validation(
                "Price must be non-negative".to_string(),
            ));
        }

        let repo = PlanRepository::new(self.db);

        if repo.exists_by_name(&name).await? {
            return Err(AppError::Conflict(
                "Subscription plan already exists with this name".to_string(),
            ));
        }

        let plan = repo
            .create(CreatePlanRecord {
                name,
                description: param.description,
                price,
                duration,
                features: param.features,
                active: param.active,
            })
            .await?;

        Ok(plan)
    }

    /// Applies a partial update to a plan.
    ///
    /// Only the provided fields change; omitted fields keep their stored
    /// values.
    ///
    /// # Arguments
    /// - `plan_id` - Plan to update
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Plan)` - The updated plan
    /// - `Err(AppError::NotFound)` - No plan with this id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, plan_id: i32, param: UpdatePlanParams) -> Result<Plan, AppError> {
        let plan = PlanRepository::new(self.db).update(plan_id, param).await?;

        plan.ok_or_else(|| AppError::NotFound("Subscription plan not found".to_string()))
    }
}
