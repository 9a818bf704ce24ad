//! Business logic layer for all domains.
//!
//! Services orchestrate validation, defaulting, and repository calls. They work
//! with domain models and parameter structs, never DTOs; controllers convert at
//! the boundary.

pub mod account;
pub mod admin;
pub mod ai;
pub mod analytics;
pub mod gift_code;
pub mod plan;
pub mod session;
pub mod sound;
pub mod token;

#[cfg(test)]
mod test;
