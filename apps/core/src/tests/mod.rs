//! Test Module
//!
//! Test suite for the wellness backend.
//!
//! ## Test Categories
//! - `brain_tests`: scoring, classification and tip selection
//! - `store_tests`: record store contract, run against SQLite and in-memory backends
//! - `risk_tests`: burnout risk thresholds and window handling
//! - `analytics_tests`: summary, daily averages and recent history
//! - `service_tests`: the full analyze flow and service read paths
//! - `config_tests`: environment-driven configuration

pub mod analytics_tests;
pub mod risk_tests;

use crate::brain::TipPair;
use crate::models::NewInteraction;
use crate::store::SqliteInteractionStore;
use chrono::{DateTime, Utc};
use tempfile::{tempdir, TempDir};

/// Opens a migrated SQLite store in a temporary directory.
///
/// The `TempDir` must outlive the store, otherwise the database file disappears.
pub async fn create_test_store() -> (SqliteInteractionStore, TempDir) {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.sqlite");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let store = SqliteInteractionStore::connect(&db_url, 5)
        .await
        .expect("Failed to open test store");

    (store, dir)
}

pub fn tips(learning_tip: &str, wellness_tip: &str) -> TipPair {
    TipPair {
        learning_tip: learning_tip.to_string(),
        wellness_tip: wellness_tip.to_string(),
    }
}

/// An interaction for `user_id`; the store sees the level `classify(score)` gives.
pub fn interaction(user_id: &str, score: i64, timestamp: Option<DateTime<Utc>>) -> NewInteraction {
    let new = NewInteraction::new(
        user_id,
        format!("message scoring {}", score),
        score,
        tips("learning tip", "wellness tip"),
    );
    match timestamp {
        Some(ts) => new.at(ts),
        None => new,
    }
}
