//! Wire-format DTOs for the HTTP API.
//!
//! Request and response bodies exchanged with clients. All response fields use
//! camelCase naming, every success body carries `success: true`, and every error
//! body is an [`api::ErrorDto`] with `success: false`. Conversion from domain
//! models happens via `into_dto()` on the corresponding model types.

pub mod account;
pub mod admin;
pub mod ai;
pub mod analytics;
pub mod api;
pub mod gift_code;
pub mod plan;
pub mod session;
pub mod sound;
