use super::{
    ensure_non_negative_limit, format_timestamp, parse_timestamp, resolve_timestamp,
    InteractionStore,
};
use crate::error::AppError;
use crate::models::{DailyAverage, InteractionRecord, NewInteraction, StressLevel};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Raw `interactions` row, before timestamp and stress level are parsed.
#[derive(Debug, FromRow)]
struct InteractionRow {
    id: i64,
    timestamp: String,
    user_id: String,
    user_message: String,
    score: i64,
    stress_level: String,
    learning_tip: String,
    wellness_tip: String,
}

impl TryFrom<InteractionRow> for InteractionRecord {
    type Error = AppError;

    fn try_from(row: InteractionRow) -> Result<Self, Self::Error> {
        Ok(InteractionRecord {
            id: row.id,
            timestamp: parse_timestamp(&row.timestamp)?,
            user_id: row.user_id,
            user_message: row.user_message,
            score: row.score,
            stress_level: parse_level(&row.stress_level)?,
            learning_tip: row.learning_tip,
            wellness_tip: row.wellness_tip,
        })
    }
}

fn parse_level(raw: &str) -> Result<StressLevel, AppError> {
    StressLevel::parse(raw)
        .ok_or_else(|| AppError::Internal(format!("Unknown stress level in storage: '{}'", raw)))
}

/// SQLite-backed interaction store.
#[derive(Clone)]
pub struct SqliteInteractionStore {
    pool: SqlitePool,
}

impl SqliteInteractionStore {
    /// Wraps an existing pool. The schema is expected to be migrated already.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `database_url` and applies migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        info!("Initializing database at: {}", database_url);

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;

        info!("Database initialized and migrations applied.");
        Ok(store)
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl InteractionStore for SqliteInteractionStore {
    #[instrument(skip(self, interaction), fields(user_id = %interaction.user_id()))]
    async fn append(&self, interaction: NewInteraction) -> Result<i64, AppError> {
        let timestamp = resolve_timestamp(interaction.timestamp(), Utc::now())?;
        let timestamp = format_timestamp(timestamp);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO interactions (timestamp, user_id, user_message, score, stress_level, learning_tip, wellness_tip)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&timestamp)
        .bind(interaction.user_id())
        .bind(interaction.user_message())
        .bind(interaction.score())
        .bind(interaction.stress_level().as_str())
        .bind(interaction.learning_tip())
        .bind(interaction.wellness_tip())
        .fetch_one(&self.pool)
        .await?;

        debug!(id, "Interaction stored");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn count_by_user_and_stress_since(
        &self,
        user_id: &str,
        level: StressLevel,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM interactions
            WHERE user_id = ? AND stress_level = ? AND timestamp >= ?
            "#,
        )
        .bind(user_id)
        .bind(level.as_str())
        .bind(format_timestamp(since))
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM interactions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_grouped_by_stress_level(&self) -> Result<BTreeMap<StressLevel, i64>, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT stress_level, COUNT(*) FROM interactions
            GROUP BY stress_level
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(level, count)| -> Result<(StressLevel, i64), AppError> {
                Ok((parse_level(&level)?, count))
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn daily_average_score_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyAverage>, AppError> {
        let rows: Vec<(String, f64)> = sqlx::query_as(
            r#"
            SELECT substr(timestamp, 1, 10) AS day, AVG(score) AS avg_score
            FROM interactions
            WHERE timestamp >= ?
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(format_timestamp(since))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(day, avg_score)| -> Result<DailyAverage, AppError> {
                Ok(DailyAverage {
                    day: NaiveDate::parse_from_str(&day, "%Y-%m-%d")?,
                    avg_score,
                })
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn most_recent(&self, limit: i64) -> Result<Vec<InteractionRecord>, AppError> {
        ensure_non_negative_limit(limit)?;

        let rows = sqlx::query_as::<_, InteractionRow>(
            r#"
            SELECT id, timestamp, user_id, user_message, score, stress_level, learning_tip, wellness_tip
            FROM interactions
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(InteractionRecord::try_from).collect()
    }
}
