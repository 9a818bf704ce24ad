//! Gift code domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::gift_code::{CreateGiftCodeDto, GiftCodeDto};

/// Gift code granting a subscription plan.
///
/// `plan_name` is a display snapshot taken when the code is created; renaming
/// the plan later does not rewrite existing codes. `expires_at` and the
/// `used_count`/`max_uses` pair are advisory metadata: nothing in the backend
/// transitions a code on expiry or increments its use count.
#[derive(Debug, Clone, PartialEq)]
pub struct GiftCode {
    pub id: i32,
    pub code: String,
    pub plan_id: i32,
    pub plan_name: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: i32,
    pub used_count: i32,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GiftCode {
    pub fn from_entity(entity: entity::gift_code::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            plan_id: entity.plan_id,
            plan_name: entity.plan_name,
            expires_at: entity.expires_at,
            max_uses: entity.max_uses,
            used_count: entity.used_count,
            description: entity.description,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GiftCodeDto {
        GiftCodeDto {
            id: self.id,
            code: self.code,
            plan_id: self.plan_id,
            plan_name: self.plan_name,
            expires_at: self.expires_at,
            max_uses: self.max_uses,
            used_count: self.used_count,
            description: self.description,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a gift code.
///
/// Code and plan id are validated as required by the service; the plan must
/// exist before any row is written.
#[derive(Debug, Clone)]
pub struct CreateGiftCodeParams {
    pub code: Option<String>,
    pub plan_id: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: i32,
    pub description: String,
}

/// Fully resolved gift code row ready for insertion.
///
/// `plan_name` is snapshotted from the validated plan by the service.
#[derive(Debug, Clone)]
pub struct CreateGiftCodeRecord {
    pub code: String,
    pub plan_id: i32,
    pub plan_name: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: i32,
    pub description: String,
}

impl CreateGiftCodeParams {
    pub fn from_dto(dto: CreateGiftCodeDto) -> Self {
        Self {
            code: dto.code,
            plan_id: dto.plan_id,
            expires_at: dto.expires_at,
            max_uses: dto.max_uses.unwrap_or(1),
            description: dto.description.unwrap_or_default(),
        }
    }
}
