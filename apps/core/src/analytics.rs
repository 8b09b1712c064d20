//! Analytics over the interaction log: totals, stress distribution, daily
//! average score and recent history. Everything is recomputed on each call.

use crate::config::{DEFAULT_ANALYTICS_WINDOW_DAYS, DEFAULT_RECENT_LIMIT};
use crate::error::AppError;
use crate::models::{AnalyticsSummary, RecentInteraction};
use crate::risk::window_start;
use crate::store::{ensure_non_negative_limit, InteractionStore};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AnalyticsAggregator {
    store: Arc<dyn InteractionStore>,
    window_days: i64,
    default_limit: i64,
}

impl AnalyticsAggregator {
    pub fn new(store: Arc<dyn InteractionStore>) -> Self {
        Self::with_settings(store, DEFAULT_ANALYTICS_WINDOW_DAYS, DEFAULT_RECENT_LIMIT)
    }

    /// `window_days` bounds the daily average series; `default_limit` is used by `recent_default`.
    pub fn with_settings(
        store: Arc<dyn InteractionStore>,
        window_days: i64,
        default_limit: i64,
    ) -> Self {
        Self {
            store,
            window_days,
            default_limit,
        }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<AnalyticsSummary, AppError> {
        let since = window_start(Utc::now(), self.window_days)?;

        let total_interactions = self.store.count_all().await?;
        let distribution = self.store.count_grouped_by_stress_level().await?;
        let daily_avg_score = self.store.daily_average_score_since(since).await?;

        info!(
            total_interactions,
            days = daily_avg_score.len(),
            "Analytics summary computed"
        );

        Ok(AnalyticsSummary {
            total_interactions,
            distribution,
            daily_avg_score,
        })
    }

    /// The newest `limit` interactions, newest first.
    #[instrument(skip(self))]
    pub async fn recent(&self, limit: i64) -> Result<Vec<RecentInteraction>, AppError> {
        ensure_non_negative_limit(limit)?;

        let records = self.store.most_recent(limit).await?;
        Ok(records.into_iter().map(RecentInteraction::from).collect())
    }

    pub async fn recent_default(&self) -> Result<Vec<RecentInteraction>, AppError> {
        self.recent(self.default_limit).await
    }
}
