use crate::data::session::SleepSessionRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::account::create_account;

mod count_since;
mod create;
mod find_in_window;
mod list_by_owner;
