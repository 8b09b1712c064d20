//! Interaction Record Store.
//!
//! An append-only log of scored interactions. `SqliteInteractionStore` is the
//! production backend; `InMemoryInteractionStore` keeps everything in a `Vec`.

pub mod memory;
pub mod sqlite;

use crate::error::AppError;
use crate::models::{DailyAverage, InteractionRecord, NewInteraction, StressLevel};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

pub use memory::InMemoryInteractionStore;
pub use sqlite::SqliteInteractionStore;

/// Defines the storage interface the scoring and analytics logic depends on.
///
/// Implementations must hand out strictly increasing ids even under concurrent `append` calls.
#[async_trait]
pub trait InteractionStore: Send + Sync + 'static {
    /// Persists a record and returns its freshly assigned id. A timestamp later
    /// than the time of the call is `InvalidArgument`.
    async fn append(&self, interaction: NewInteraction) -> Result<i64, AppError>;

    /// Number of records of `user_id` at `level` with `timestamp >= since`.
    async fn count_by_user_and_stress_since(
        &self,
        user_id: &str,
        level: StressLevel,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError>;

    async fn count_all(&self) -> Result<i64, AppError>;

    /// Record counts per stress level. Levels with no records are absent.
    async fn count_grouped_by_stress_level(&self) -> Result<BTreeMap<StressLevel, i64>, AppError>;

    /// Mean score per UTC day for records with `timestamp >= since`, ascending by day.
    async fn daily_average_score_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyAverage>, AppError>;

    /// Up to `limit` records, newest (highest id) first. Negative limits are rejected.
    async fn most_recent(&self, limit: i64) -> Result<Vec<InteractionRecord>, AppError>;
}

pub(crate) fn ensure_non_negative_limit(limit: i64) -> Result<(), AppError> {
    if limit < 0 {
        return Err(AppError::InvalidArgument(format!(
            "limit must be >= 0, got {}",
            limit
        )));
    }
    Ok(())
}

/// Timestamp to store for an append at `now`. Back-dated instants are kept;
/// instants after `now` are rejected.
pub(crate) fn resolve_timestamp(
    requested: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, AppError> {
    match requested {
        Some(ts) if ts > now => Err(AppError::InvalidArgument(format!(
            "interaction timestamp {} is in the future",
            format_timestamp(ts)
        ))),
        Some(ts) => Ok(ts),
        None => Ok(now),
    }
}

/// Fixed-width UTC text form used for stored timestamps. Lexical order matches
/// chronological order and the first 10 characters are the UTC day.
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}
