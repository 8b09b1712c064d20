use crate::brain::{classify, TipPair};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::Validate;

/// Stress level of a single interaction, derived from its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Windowed burnout signal for a user. Not the same thing as a single interaction's `StressLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BurnoutRisk {
    Low,
    Medium,
    High,
}

/// A stored, scored conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Store-assigned identifier; strictly increasing with insertion order.
    pub id: i64,
    /// UTC instant the interaction was scored.
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    /// Raw message text, original casing.
    pub user_message: String,
    pub score: i64,
    pub stress_level: StressLevel,
    pub learning_tip: String,
    pub wellness_tip: String,
}

/// An interaction waiting to be appended. The store assigns the id, and the
/// timestamp unless one was set with `at`.
///
/// The stress level is always derived from the score, so a stored record can
/// never carry a level that contradicts its own score.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInteraction {
    timestamp: Option<DateTime<Utc>>,
    user_id: String,
    user_message: String,
    score: i64,
    stress_level: StressLevel,
    learning_tip: String,
    wellness_tip: String,
}

impl NewInteraction {
    pub fn new(
        user_id: impl Into<String>,
        user_message: impl Into<String>,
        score: i64,
        tips: TipPair,
    ) -> Self {
        Self {
            timestamp: None,
            user_id: user_id.into(),
            user_message: user_message.into(),
            score,
            stress_level: classify(score),
            learning_tip: tips.learning_tip,
            wellness_tip: tips.wellness_tip,
        }
    }

    /// Back-dates the interaction. Stores reject instants later than the time of `append`.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn stress_level(&self) -> StressLevel {
        self.stress_level
    }

    pub fn learning_tip(&self) -> &str {
        &self.learning_tip
    }

    pub fn wellness_tip(&self) -> &str {
        &self.wellness_tip
    }

    pub fn into_record(self, id: i64, timestamp: DateTime<Utc>) -> InteractionRecord {
        InteractionRecord {
            id,
            timestamp,
            user_id: self.user_id,
            user_message: self.user_message,
            score: self.score,
            stress_level: self.stress_level,
            learning_tip: self.learning_tip,
            wellness_tip: self.wellness_tip,
        }
    }
}

/// Average score of all interactions recorded on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub day: NaiveDate,
    pub avg_score: f64,
}

/// Externally visible projection of an `InteractionRecord` (the id stays internal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentInteraction {
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub user_message: String,
    pub score: i64,
    pub stress_level: StressLevel,
    pub learning_tip: String,
    pub wellness_tip: String,
}

impl From<InteractionRecord> for RecentInteraction {
    fn from(record: InteractionRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            user_id: record.user_id,
            user_message: record.user_message,
            score: record.score,
            stress_level: record.stress_level,
            learning_tip: record.learning_tip,
            wellness_tip: record.wellness_tip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_interactions: i64,
    /// Only levels present in the data appear.
    pub distribution: BTreeMap<StressLevel, i64>,
    pub daily_avg_score: Vec<DailyAverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRisk {
    pub user_id: String,
    pub window_days: i64,
    pub burnout_risk: BurnoutRisk,
}

fn default_user_id() -> String {
    "anonymous".to_string()
}

/// A scoring request as received from the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Free text to score. May be empty.
    #[validate(length(max = 4000))]
    pub text: String,
    #[serde(default = "default_user_id")]
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id: default_user_id(),
        }
    }

    pub fn for_user(text: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyType {
    Emotion,
    Neutral,
}

/// Canonical reply returned for a scoring request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeReply {
    pub reply: String,
    pub score: i64,
    pub stress_level: StressLevel,
    #[serde(rename = "type")]
    pub reply_type: ReplyType,
    pub learning_tip: String,
    pub wellness_tip: String,
    pub interaction_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub time: DateTime<Utc>,
}
