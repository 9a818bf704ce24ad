use crate::{data::account::AccountRepository, model::account::CreateAccountParams};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod apply_session_counters;
mod create;
mod email_exists;
mod find_credentials_by_email;
mod list_all;
mod touch_last_login;
