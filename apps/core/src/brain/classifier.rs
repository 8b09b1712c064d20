use crate::models::StressLevel;

/// Maps a sentiment score to a stress level.
///
/// Positive scores are `Low`, exactly zero is `Medium`, negative scores are `High`.
pub fn classify(score: i64) -> StressLevel {
    match score {
        s if s >= 1 => StressLevel::Low,
        0 => StressLevel::Medium,
        _ => StressLevel::High,
    }
}
