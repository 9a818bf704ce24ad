//! Gift code service.

use sea_orm::DatabaseConnection;

use crate::{
    data::{gift_code::GiftCodeRepository, plan::PlanRepository},
    error::AppError,
    model::gift_code::{CreateGiftCodeParams, CreateGiftCodeRecord, GiftCode},
};

/// Service providing business logic for gift code management.
pub struct GiftCodeService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GiftCodeService<'a> {
    /// Creates a new GiftCodeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GiftCodeService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a gift code granting the referenced plan.
    ///
    /// The referenced plan must exist before anything is written, and the
    /// plan's name is snapshotted onto the code so later plan renames do not
    /// change what the code displays. Codes are stored uppercase and must be
    /// unique.
    ///
    /// # Arguments
    /// - `param` - Raw gift code fields from the request body
    ///
    /// # Returns
    /// - `Ok(GiftCode)` - The stored code
    /// - `Err(AppError::Validation)` - Missing code or plan id
    /// - `Err(AppError::NotFound)` - Referenced plan does not exist
    /// - `Err(AppError::Conflict)` - Code already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGiftCodeParams) -> Result<GiftCode, AppError> {
        let (Some(code), Some(plan_id)) = (param.code, param.plan_id) else {
            return Err(AppError::Validation(
                "Code and plan ID are required".to_string(),
            ));
        };
        if code.is_empty() {
            return Err(AppError::Validation(
                "Code and plan ID are required".to_string(),
            ));
        }

        let code = code.to_uppercase();

        let Some(plan) = PlanRepository::new(self.db).find_by_id(plan_id).await? else {
            return Err(AppError::NotFound(
                "Subscription plan not found".to_string(),
            ));
        };

        let repo = GiftCodeRepository::new(self.db);

        if repo.exists_by_code(&code).await? {
            return Err(AppError::Conflict("Gift code already exists".to_string()));
        }

        let gift_code = repo
            .create(CreateGiftCodeRecord {
                code,
                plan_id,
                plan_name: plan.name,
                expires_at: param.expires_at,
                max_uses: param.max_uses,
                description: param.description,
            })
            .await?;

        Ok(gift_code)
    }

    /// Lists all gift codes, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<GiftCode>)` - All codes ordered by creation time descending
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list(&self) -> Result<Vec<GiftCode>, AppError> {
        let codes = GiftCodeRepository::new(self.db).list_all().await?;

        Ok(codes)
    }

    /// Deactivates a gift code by its code string.
    ///
    /// Lookup is case-insensitive because codes are stored uppercase.
    ///
    /// # Arguments
    /// - `code` - Code string from the request path
    ///
    /// # Returns
    /// - `Ok(GiftCode)` - The deactivated code
    /// - `Err(AppError::NotFound)` - No code with this value
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn deactivate(&self, code: &str) -> Result<GiftCode, AppError> {
        let gift_code = GiftCodeRepository::new(self.db)
            .deactivate(&code.to_uppercase())
            .await?;

        gift_code.ok_or_else(|| AppError::NotFound("Gift code not found".to_string()))
    }
}
