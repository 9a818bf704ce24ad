use crate::{
    data::sound::SoundRepository,
    model::sound::{CreateSoundRecord, UpdateSoundParams},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod delete;
mod list_active;
mod update;
