use crate::{
    data::plan::PlanRepository,
    model::plan::{CreatePlanRecord, UpdatePlanParams},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod exists_by_name;
mod list_active;
mod update;
