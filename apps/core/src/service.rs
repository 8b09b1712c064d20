//! Wellness service: the entry point the transport layer talks to.
//!
//! It wires the brain (scoring, classification, tips) to the interaction store
//! and exposes the burnout and analytics read paths.

use crate::analytics::AnalyticsAggregator;
use crate::brain::{classify, reply, Lexicon, SentimentScorer, TipSelector};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{
    AnalyticsSummary, AnalyzeReply, AnalyzeRequest, HealthReport, NewInteraction,
    RecentInteraction, UserRisk,
};
use crate::risk::BurnoutRiskEvaluator;
use crate::store::InteractionStore;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex};
use tracing::{info, instrument};
use validator::Validate;

pub struct WellnessService {
    store: Arc<dyn InteractionStore>,
    lexicon: &'static Lexicon,
    rng: Mutex<Box<dyn RngCore + Send>>,
    risk: BurnoutRiskEvaluator,
    analytics: AnalyticsAggregator,
}

impl WellnessService {
    /// Creates a service with the built-in lexicon, default windows and an entropy-seeded RNG.
    pub fn new(store: Arc<dyn InteractionStore>) -> Self {
        Self::with_config(store, &AppConfig::default())
    }

    pub fn with_config(store: Arc<dyn InteractionStore>, config: &AppConfig) -> Self {
        Self::with_parts(
            store,
            Lexicon::builtin(),
            Box::new(StdRng::from_entropy()),
            config,
        )
    }

    /// Full constructor; tests pass a deterministic random source here.
    pub fn with_parts(
        store: Arc<dyn InteractionStore>,
        lexicon: &'static Lexicon,
        rng: Box<dyn RngCore + Send>,
        config: &AppConfig,
    ) -> Self {
        Self {
            risk: BurnoutRiskEvaluator::with_window(store.clone(), config.risk_window_days),
            analytics: AnalyticsAggregator::with_settings(
                store.clone(),
                config.analytics_window_days,
                config.recent_limit,
            ),
            store,
            lexicon,
            rng: Mutex::new(rng),
        }
    }

    /// Scores a message, stores the interaction and builds the reply.
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeReply, AppError> {
        request.validate()?;

        let score = SentimentScorer::new(self.lexicon).score(&request.text);
        let stress_level = classify(score);
        let tips = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| AppError::Internal("Random source lock poisoned".to_string()))?;
            TipSelector::new(self.lexicon).pick(&mut **rng)
        };

        let interaction_id = self
            .store
            .append(NewInteraction::new(
                request.user_id,
                request.text,
                score,
                tips.clone(),
            ))
            .await?;

        info!(interaction_id, score, %stress_level, "Interaction analyzed");

        Ok(AnalyzeReply {
            reply: reply::reply_text(stress_level).to_string(),
            score,
            stress_level,
            reply_type: reply::reply_type(stress_level),
            learning_tip: tips.learning_tip,
            wellness_tip: tips.wellness_tip,
            interaction_id,
        })
    }

    pub async fn summary(&self) -> Result<AnalyticsSummary, AppError> {
        self.analytics.summary().await
    }

    /// Recent interactions; `None` uses the configured default limit.
    pub async fn recent(&self, limit: Option<i64>) -> Result<Vec<RecentInteraction>, AppError> {
        match limit {
            Some(limit) => self.analytics.recent(limit).await,
            None => self.analytics.recent_default().await,
        }
    }

    /// Burnout risk for a user; `None` uses the configured default window.
    pub async fn burnout_risk(
        &self,
        user_id: &str,
        window_days: Option<i64>,
    ) -> Result<UserRisk, AppError> {
        let window_days = window_days.unwrap_or(self.risk.default_window_days());
        let burnout_risk = self.risk.evaluate_window(user_id, window_days).await?;
        Ok(UserRisk {
            user_id: user_id.to_string(),
            window_days,
            burnout_risk,
        })
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "ok".to_string(),
            time: Utc::now(),
        }
    }
}
