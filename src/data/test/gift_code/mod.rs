use crate::{data::gift_code::GiftCodeRepository, model::gift_code::CreateGiftCodeRecord};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod deactivate;
mod exists_by_code;
mod list_all;
