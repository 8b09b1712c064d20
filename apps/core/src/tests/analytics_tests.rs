//! Analytics Tests

use super::{create_test_store, interaction, tips};
use crate::analytics::AnalyticsAggregator;
use crate::brain::SentimentScorer;
use crate::error::AppError;
use crate::models::{NewInteraction, StressLevel};
use crate::store::{InMemoryInteractionStore, InteractionStore};
use chrono::{Duration, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;

fn scored(text: &str) -> NewInteraction {
    let score = SentimentScorer::default().score(text);
    NewInteraction::new("anonymous", text, score, tips("learning", "wellness"))
}

#[tokio::test]
async fn test_summary_reference_scenario() {
    let (store, _dir) = create_test_store().await;
    store.append(scored("I feel great today")).await.unwrap();
    store.append(scored("I am so stressed and tired")).await.unwrap();

    let summary = AnalyticsAggregator::new(Arc::new(store)).summary().await.unwrap();

    assert_eq!(summary.total_interactions, 2);
    let expected: BTreeMap<_, _> = [(StressLevel::Low, 1), (StressLevel::High, 1)].into();
    assert_eq!(summary.distribution, expected);

    // Both interactions were scored just now, so they share today's bucket.
    assert_eq!(summary.daily_avg_score.len(), 1);
    assert_eq!(summary.daily_avg_score[0].day, Utc::now().date_naive());
    assert_eq!(summary.daily_avg_score[0].avg_score, -1.5);
}

#[tokio::test]
async fn test_summary_on_empty_store() {
    let aggregator = AnalyticsAggregator::new(Arc::new(InMemoryInteractionStore::new()));
    let summary = aggregator.summary().await.unwrap();

    assert_eq!(summary.total_interactions, 0);
    assert!(summary.distribution.is_empty());
    assert!(summary.daily_avg_score.is_empty());
}

#[tokio::test]
async fn test_daily_average_stays_within_window() {
    let store = Arc::new(InMemoryInteractionStore::new());
    let now = Utc::now();
    let yesterday = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);

    for (score, ts) in [
        (3, yesterday),
        (-2, yesterday),
        (1, two_days_ago),
        (-8, now - Duration::days(45)),
    ] {
        store.append(interaction("kim", score, Some(ts))).await.unwrap();
    }

    let summary = AnalyticsAggregator::new(store).summary().await.unwrap();

    // The 45 day old record still counts toward totals, just not the daily series.
    assert_eq!(summary.total_interactions, 4);
    assert_eq!(summary.daily_avg_score.len(), 2);
    assert_eq!(summary.daily_avg_score[0].day, two_days_ago.date_naive());
    assert_eq!(summary.daily_avg_score[0].avg_score, 1.0);
    assert_eq!(summary.daily_avg_score[1].day, yesterday.date_naive());
    assert_eq!(summary.daily_avg_score[1].avg_score, 0.5);

    let since = (now - Duration::days(30)).date_naive();
    assert!(summary
        .daily_avg_score
        .iter()
        .all(|d| d.day >= since && d.day <= now.date_naive()));
}

#[tokio::test]
async fn test_custom_analytics_window() {
    let store = Arc::new(InMemoryInteractionStore::new());
    let now = Utc::now();
    store
        .append(interaction("lee", 2, Some(now - Duration::days(10))))
        .await
        .unwrap();

    let narrow = AnalyticsAggregator::with_settings(store.clone(), 5, 50);
    assert!(narrow.summary().await.unwrap().daily_avg_score.is_empty());

    let wide = AnalyticsAggregator::with_settings(store, 60, 50);
    assert_eq!(wide.summary().await.unwrap().daily_avg_score.len(), 1);
}

#[tokio::test]
async fn test_recent_projects_visible_fields_newest_first() {
    let (store, _dir) = create_test_store().await;
    store.append(scored("I feel great today")).await.unwrap();
    store.append(scored("Panic!")).await.unwrap();
    store.append(scored("meh")).await.unwrap();

    let aggregator = AnalyticsAggregator::new(Arc::new(store));
    let recent = aggregator.recent(2).await.unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].user_message, "meh");
    assert_eq!(recent[0].stress_level, StressLevel::Medium);
    assert_eq!(recent[1].user_message, "Panic!");
    assert_eq!(recent[1].score, -2);
    assert_eq!(recent[1].user_id, "anonymous");
    assert_eq!(recent[1].learning_tip, "learning");
    assert_eq!(recent[1].wellness_tip, "wellness");

    assert_eq!(aggregator.recent_default().await.unwrap().len(), 3);
    assert!(aggregator.recent(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_recent_default_limit() {
    let store = Arc::new(InMemoryInteractionStore::new());
    for i in 0..60 {
        store.append(interaction("max", i % 3 - 1, None)).await.unwrap();
    }

    let aggregator = AnalyticsAggregator::new(store.clone());
    assert_eq!(aggregator.recent_default().await.unwrap().len(), 50);

    let small = AnalyticsAggregator::with_settings(store, 30, 5);
    assert_eq!(small.recent_default().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_negative_limit_is_rejected() {
    let aggregator = AnalyticsAggregator::new(Arc::new(InMemoryInteractionStore::new()));
    assert!(matches!(
        aggregator.recent(-1).await,
        Err(AppError::InvalidArgument(_))
    ));
}
