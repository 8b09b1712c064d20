use crate::models::{ReplyType, StressLevel};

const HIGH_STRESS_REPLY: &str = "I notice you might be feeling stressed. Try a 1-minute deep breathing exercise: Inhale 4s • Hold 4s • Exhale 4s.";
const MEDIUM_STRESS_REPLY: &str =
    "Thanks for checking in. How is your day going? A short pause can help you reset.";
const LOW_STRESS_REPLY: &str = "You're doing good! Let me know if you'd like help with something.";

/// Reply text for a stress level.
pub fn reply_text(level: StressLevel) -> &'static str {
    match level {
        StressLevel::High => HIGH_STRESS_REPLY,
        StressLevel::Medium => MEDIUM_STRESS_REPLY,
        StressLevel::Low => LOW_STRESS_REPLY,
    }
}

/// Anything above `Low` is answered as an emotional message.
pub fn reply_type(level: StressLevel) -> ReplyType {
    match level {
        StressLevel::High | StressLevel::Medium => ReplyType::Emotion,
        StressLevel::Low => ReplyType::Neutral,
    }
}
