//! Domain models and operation parameters.
//!
//! Types used by the service and data layers: domain representations converted
//! from entity models at the repository boundary (`from_entity`) and into wire
//! DTOs at the controller boundary (`into_dto`), plus parameter structs for
//! create and update operations.

pub mod account;
pub mod admin;
pub mod ai;
pub mod analytics;
pub mod gift_code;
pub mod plan;
pub mod session;
pub mod sound;
