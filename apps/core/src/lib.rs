//! Wellness bot backend core.
//!
//! Scores short user messages for stress, keeps an append-only log of every
//! scored interaction and derives analytics and a per-user burnout risk from it.

pub mod analytics;
pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod risk;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::AppError;
pub use service::WellnessService;
