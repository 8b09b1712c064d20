//! Fixed keyword sets and tip pools.
//!
//! The built-in lexicon is created once per process and shared by reference;
//! nothing mutates it after construction.

use std::sync::OnceLock;

/// Substrings that signal stress. Each match subtracts 2 from the score.
const STRESS_KEYWORDS: &[&str] = &[
    "stress",
    "tired",
    "depressed",
    "sad",
    "angry",
    "anxious",
    "pressure",
    "overwhelmed",
    "burnout",
    "frustrated",
    "worried",
    "upset",
    "panic",
    "exhausted",
];

/// Substrings that signal a positive mood. Each match adds 1 to the score.
const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "excited",
    "relaxed",
    "calm",
    "motivated",
    "fine",
    "awesome",
    "excellent",
];

const MICROLEARNING_TIPS: &[&str] = &[
    "💡 Take a 2-minute break every hour to refresh your mind.",
    "💡 Organize tasks in small chunks to reduce overwhelm.",
    "💡 Practice deep breathing for 1 minute to improve focus.",
    "💡 Write down your top 3 priorities for today.",
    "💡 Try positive self-talk when feeling stressed.",
    "💡 Stand up and stretch every hour to increase energy.",
];

const WELLNESS_REMINDERS: &[&str] = &[
    "Remember to drink water regularly 💧",
    "Take short breaks to reduce fatigue 🧘‍♂️",
    "Maintain a healthy posture while working 🪑",
    "Avoid staring at screens for long periods 👀",
    "Practice gratitude daily 🌟",
    "Stay active: a quick walk helps your brain 🏃‍♂️",
];

static BUILTIN: OnceLock<Lexicon> = OnceLock::new();

/// Keyword sets used for scoring plus the tip pools used for replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stress_words: Vec<String>,
    positive_words: Vec<String>,
    microlearning_tips: Vec<String>,
    wellness_tips: Vec<String>,
}

impl Lexicon {
    /// Builds a custom lexicon. Keywords are lower-cased since matching runs on lower-cased text.
    ///
    /// Empty keywords are dropped here: an empty substring would match every text.
    pub fn new<S: AsRef<str>>(
        stress_words: &[S],
        positive_words: &[S],
        microlearning_tips: &[S],
        wellness_tips: &[S],
    ) -> Self {
        let lower = |words: &[S]| {
            words
                .iter()
                .map(|w| w.as_ref().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        let owned = |tips: &[S]| tips.iter().map(|t| t.as_ref().to_string()).collect();
        Self {
            stress_words: lower(stress_words),
            positive_words: lower(positive_words),
            microlearning_tips: owned(microlearning_tips),
            wellness_tips: owned(wellness_tips),
        }
    }

    /// The process-wide built-in lexicon.
    pub fn builtin() -> &'static Lexicon {
        BUILTIN.get_or_init(|| {
            Lexicon::new(
                STRESS_KEYWORDS,
                POSITIVE_WORDS,
                MICROLEARNING_TIPS,
                WELLNESS_REMINDERS,
            )
        })
    }

    pub fn stress_words(&self) -> &[String] {
        &self.stress_words
    }

    pub fn positive_words(&self) -> &[String] {
        &self.positive_words
    }

    pub fn microlearning_tips(&self) -> &[String] {
        &self.microlearning_tips
    }

    pub fn wellness_tips(&self) -> &[String] {
        &self.wellness_tips
    }
}
