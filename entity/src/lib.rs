pub mod prelude;

pub mod account;
pub mod gift_code;
pub mod sleep_session;
pub mod sound_asset;
pub mod subscription_plan;
