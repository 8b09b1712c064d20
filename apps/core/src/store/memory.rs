use super::{ensure_non_negative_limit, resolve_timestamp, InteractionStore};
use crate::error::AppError;
use crate::models::{DailyAverage, InteractionRecord, NewInteraction, StressLevel};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Interaction store kept entirely in memory.
///
/// Ids are assigned while holding the write lock, so concurrent appends never
/// share or reorder ids.
#[derive(Default)]
pub struct InMemoryInteractionStore {
    records: RwLock<Vec<InteractionRecord>>,
}

impl InMemoryInteractionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InteractionStore for InMemoryInteractionStore {
    async fn append(&self, interaction: NewInteraction) -> Result<i64, AppError> {
        let timestamp = resolve_timestamp(interaction.timestamp(), Utc::now())?;

        let mut records = self.records.write().await;
        let id = records.last().map_or(1, |r| r.id + 1);
        records.push(interaction.into_record(id, timestamp));
        Ok(id)
    }

    async fn count_by_user_and_stress_since(
        &self,
        user_id: &str,
        level: StressLevel,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let records = self.records.read().await;
        let count = records
            .iter()
            .filter(|r| r.user_id == user_id && r.stress_level == level && r.timestamp >= since)
            .count();
        Ok(count as i64)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        Ok(self.records.read().await.len() as i64)
    }

    async fn count_grouped_by_stress_level(&self) -> Result<BTreeMap<StressLevel, i64>, AppError> {
        let records = self.records.read().await;
        let mut distribution = BTreeMap::new();
        for record in records.iter() {
            *distribution.entry(record.stress_level).or_insert(0) += 1;
        }
        Ok(distribution)
    }

    async fn daily_average_score_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyAverage>, AppError> {
        let records = self.records.read().await;

        // day -> (sum, count)
        let mut days: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();
        for record in records.iter().filter(|r| r.timestamp >= since) {
            let entry = days.entry(record.timestamp.date_naive()).or_insert((0, 0));
            entry.0 += record.score;
            entry.1 += 1;
        }

        Ok(days
            .into_iter()
            .map(|(day, (sum, count))| DailyAverage {
                day,
                avg_score: sum as f64 / count as f64,
            })
            .collect())
    }

    async fn most_recent(&self, limit: i64) -> Result<Vec<InteractionRecord>, AppError> {
        ensure_non_negative_limit(limit)?;

        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
