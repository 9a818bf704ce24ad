//! Factories for creating test entities with sensible defaults.
//!
//! Each factory follows a builder pattern: construct with a database
//! connection, override the fields the test cares about, then `build()` to
//! insert the row and get the entity model back.

pub mod account;
pub mod gift_code;
pub mod helpers;
pub mod sleep_session;
pub mod sound_asset;
pub mod subscription_plan;
