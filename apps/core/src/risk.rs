//! Burnout risk: a coarse trailing-window rule over a user's High-stress interactions.

use crate::config::DEFAULT_RISK_WINDOW_DAYS;
use crate::error::AppError;
use crate::models::{BurnoutRisk, StressLevel};
use crate::store::InteractionStore;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, instrument};

const HIGH_RISK_MIN_COUNT: i64 = 6;
const MEDIUM_RISK_MIN_COUNT: i64 = 4;

/// Maps the number of High-stress interactions in the window to a risk label.
pub fn risk_for_high_count(count: i64) -> BurnoutRisk {
    if count >= HIGH_RISK_MIN_COUNT {
        BurnoutRisk::High
    } else if count >= MEDIUM_RISK_MIN_COUNT {
        BurnoutRisk::Medium
    } else {
        BurnoutRisk::Low
    }
}

pub struct BurnoutRiskEvaluator {
    store: Arc<dyn InteractionStore>,
    default_window_days: i64,
}

impl BurnoutRiskEvaluator {
    pub fn new(store: Arc<dyn InteractionStore>) -> Self {
        Self::with_window(store, DEFAULT_RISK_WINDOW_DAYS)
    }

    pub fn with_window(store: Arc<dyn InteractionStore>, default_window_days: i64) -> Self {
        Self {
            store,
            default_window_days,
        }
    }

    pub fn default_window_days(&self) -> i64 {
        self.default_window_days
    }

    /// Risk over the default window.
    pub async fn evaluate(&self, user_id: &str) -> Result<BurnoutRisk, AppError> {
        self.evaluate_window(user_id, self.default_window_days).await
    }

    /// Counts the user's High-stress records with `timestamp >= now - window_days`.
    /// Medium and Low records never contribute.
    #[instrument(skip(self))]
    pub async fn evaluate_window(
        &self,
        user_id: &str,
        window_days: i64,
    ) -> Result<BurnoutRisk, AppError> {
        let since = window_start(Utc::now(), window_days)?;

        let count = self
            .store
            .count_by_user_and_stress_since(user_id, StressLevel::High, since)
            .await?;
        let risk = risk_for_high_count(count);

        debug!(count, ?risk, "Burnout risk evaluated");
        Ok(risk)
    }
}

/// Start of a trailing window of `window_days` days ending at `now`.
pub(crate) fn window_start(now: DateTime<Utc>, window_days: i64) -> Result<DateTime<Utc>, AppError> {
    if window_days < 0 {
        return Err(AppError::InvalidArgument(format!(
            "window_days must be >= 0, got {}",
            window_days
        )));
    }
    Duration::try_days(window_days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| {
            AppError::InvalidArgument(format!("window_days is too large: {}", window_days))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(risk_for_high_count(0), BurnoutRisk::Low);
        assert_eq!(risk_for_high_count(3), BurnoutRisk::Low);
        assert_eq!(risk_for_high_count(4), BurnoutRisk::Medium);
        assert_eq!(risk_for_high_count(5), BurnoutRisk::Medium);
        assert_eq!(risk_for_high_count(6), BurnoutRisk::High);
        assert_eq!(risk_for_high_count(7), BurnoutRisk::High);
    }

    #[test]
    fn test_window_start_validation() {
        let now = Utc::now();
        assert_eq!(window_start(now, 7).unwrap(), now - Duration::days(7));
        assert_eq!(window_start(now, 0).unwrap(), now);
        assert!(matches!(window_start(now, -1), Err(AppError::InvalidArgument(_))));
        assert!(matches!(
            window_start(now, i64::MAX),
            Err(AppError::InvalidArgument(_))
        ));
    }
}
