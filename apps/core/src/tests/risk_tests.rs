//! Burnout Risk Tests

use super::{create_test_store, interaction};
use crate::error::AppError;
use crate::models::BurnoutRisk;
use crate::risk::BurnoutRiskEvaluator;
use crate::store::{InMemoryInteractionStore, InteractionStore};
use chrono::{Duration, Utc};
use std::sync::Arc;

async fn seed_high(store: &dyn InteractionStore, user_id: &str, count: usize, age: Duration) {
    for _ in 0..count {
        store
            .append(interaction(user_id, -2, Some(Utc::now() - age)))
            .await
            .expect("Failed to append");
    }
}

async fn risk_with_high_count(count: usize) -> BurnoutRisk {
    let store = Arc::new(InMemoryInteractionStore::new());
    seed_high(store.as_ref(), "alice", count, Duration::hours(1)).await;
    BurnoutRiskEvaluator::new(store)
        .evaluate("alice")
        .await
        .expect("Failed to evaluate risk")
}

#[tokio::test]
async fn test_risk_thresholds() {
    assert_eq!(risk_with_high_count(0).await, BurnoutRisk::Low);
    assert_eq!(risk_with_high_count(3).await, BurnoutRisk::Low);
    assert_eq!(risk_with_high_count(4).await, BurnoutRisk::Medium);
    assert_eq!(risk_with_high_count(5).await, BurnoutRisk::Medium);
    assert_eq!(risk_with_high_count(6).await, BurnoutRisk::High);
    assert_eq!(risk_with_high_count(7).await, BurnoutRisk::High);
}

#[tokio::test]
async fn test_only_high_records_count() {
    let store = Arc::new(InMemoryInteractionStore::new());
    for score in [0, 0, 0, 1, 2, 3, 0, 1] {
        store
            .append(interaction("bob", score, Some(Utc::now() - Duration::hours(2))))
            .await
            .unwrap();
    }
    seed_high(store.as_ref(), "bob", 3, Duration::hours(2)).await;

    let risk = BurnoutRiskEvaluator::new(store).evaluate("bob").await.unwrap();
    assert_eq!(risk, BurnoutRisk::Low);
}

#[tokio::test]
async fn test_records_outside_window_are_ignored() {
    let store = Arc::new(InMemoryInteractionStore::new());
    seed_high(store.as_ref(), "carol", 4, Duration::hours(1)).await;
    seed_high(store.as_ref(), "carol", 10, Duration::days(8)).await;

    let evaluator = BurnoutRiskEvaluator::new(store);
    assert_eq!(evaluator.evaluate("carol").await.unwrap(), BurnoutRisk::Medium);
    assert_eq!(
        evaluator.evaluate_window("carol", 30).await.unwrap(),
        BurnoutRisk::High
    );
}

#[tokio::test]
async fn test_other_users_do_not_contribute() {
    let store = Arc::new(InMemoryInteractionStore::new());
    seed_high(store.as_ref(), "dave", 7, Duration::hours(1)).await;

    let evaluator = BurnoutRiskEvaluator::new(store);
    assert_eq!(evaluator.evaluate("erin").await.unwrap(), BurnoutRisk::Low);
    assert_eq!(evaluator.evaluate("dave").await.unwrap(), BurnoutRisk::High);
}

#[tokio::test]
async fn test_negative_window_is_rejected() {
    let evaluator = BurnoutRiskEvaluator::new(Arc::new(InMemoryInteractionStore::new()));
    assert!(matches!(
        evaluator.evaluate_window("alice", -1).await,
        Err(AppError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_risk_against_sqlite_store() {
    let (store, _dir) = create_test_store().await;
    seed_high(&store, "frank", 6, Duration::days(2)).await;
    seed_high(&store, "grace", 4, Duration::days(6)).await;
    seed_high(&store, "grace", 2, Duration::days(9)).await;

    let evaluator = BurnoutRiskEvaluator::new(Arc::new(store));
    assert_eq!(evaluator.evaluate("frank").await.unwrap(), BurnoutRisk::High);
    assert_eq!(evaluator.evaluate("grace").await.unwrap(), BurnoutRisk::Medium);
}
