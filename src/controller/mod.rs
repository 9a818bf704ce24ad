//! HTTP request handlers.
//!
//! Controllers stay thin: verify access through the auth guard, convert DTOs
//! to parameter types, call one service, and convert the result back.

pub mod admin;
pub mod ai;
pub mod analytics;
pub mod gift_code;
pub mod health;
pub mod param;
pub mod plan;
pub mod session;
pub mod sound;
pub mod user;
