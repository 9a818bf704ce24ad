//! Gift code data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::gift_code::{CreateGiftCodeRecord, GiftCode};

/// Repository providing database operations for gift codes.
pub struct GiftCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiftCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new gift code with zero uses.
    ///
    /// # Arguments
    /// - `record` - Gift code row with the plan name already snapshotted
    ///
    /// # Returns
    /// - `Ok(GiftCode)` - The created gift code
    /// - `Err(DbErr)` - Database error during insert (including unique code violations)
    pub async fn create(&self, record: CreateGiftCodeRecord) -> Result<GiftCode, DbErr> {
        let now = Utc::now();
        let entity = entity::gift_code::ActiveModel {
            code: ActiveValue::Set(record.code),
            plan_id: ActiveValue::Set(record.plan_id),
            plan_name: ActiveValue::Set(record.plan_name),
            expires_at: ActiveValue::Set(record.expires_at),
            max_uses: ActiveValue::Set(record.max_uses),
            used_count: ActiveValue::Set(0),
            description: ActiveValue::Set(record.description),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GiftCode::from_entity(entity))
    }

    /// Checks whether a gift code with the given code string already exists.
    ///
    /// Pre-check for the friendly 409; the unique index on code closes the
    /// concurrent-writer race.
    pub async fn exists_by_code(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::GiftCode::find()
            .filter(entity::gift_code::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all gift codes, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<GiftCode>)` - All codes ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_all(&self) -> Result<Vec<GiftCode>, DbErr> {
        let entities = entity::prelude::GiftCode::find()
            .order_by_desc(entity::gift_code::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GiftCode::from_entity).collect())
    }

    /// Deactivates a gift code by its code string.
    ///
    /// The transition is one-way; there is no reactivation operation.
    ///
    /// # Arguments
    /// - `code` - Code string to deactivate
    ///
    /// # Returns
    /// - `Ok(Some(GiftCode))` - The deactivated code
    /// - `Ok(None)` - No code with that string
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn deactivate(&self, code: &str) -> Result<Option<GiftCode>, DbErr> {
        let Some(existing) = entity::prelude::GiftCode::find()
            .filter(entity::gift_code::Column::Code.eq(code))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.active = ActiveValue::Set(false);
        model.updated_at = ActiveValue::Set(Utc::now());

        let entity = model.update(self.db).await?;

        Ok(Some(GiftCode::from_entity(entity)))
    }
}
