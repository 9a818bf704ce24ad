//! Subscription plan domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::plan::{CreatePlanDto, PlanDto, UpdatePlanDto};

/// Subscription plan offered to users.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub features: Vec<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    pub fn from_entity(entity: entity::subscription_plan::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            duration: entity.duration,
            features: entity.features.0,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
            features: self.features,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a subscription plan.
///
/// Name, price, and duration are validated as required by the service.
#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    pub name: Option<String>,
    pub description: String,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub features: Vec<String>,
    pub active: bool,
}

impl CreatePlanParams {
    pub fn from_dto(dto: CreatePlanDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description.unwrap_or_default(),
            price: dto.price,
            duration: dto.duration,
            features: dto.features.unwrap_or_default(),
            active: dto.active.unwrap_or(true),
        }
    }
}

/// Fully resolved plan row ready for insertion, produced by the service after
/// required-field validation.
#[derive(Debug, Clone)]
pub struct CreatePlanRecord {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub features: Vec<String>,
    pub active: bool,
}

/// Parameters for a partial plan update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlanParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
    pub active: Option<bool>,
}

impl UpdatePlanParams {
    pub fn from_dto(dto: UpdatePlanDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            duration: dto.duration,
            features: dto.features,
            active: dto.active,
        }
    }
}
