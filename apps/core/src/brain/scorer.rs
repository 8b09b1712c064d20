//! Keyword sentiment scoring.
//!
//! Each lexicon entry is checked independently as a substring of the lower-cased
//! text, so "distressed" also hits "stress" and overlapping entries both count.

use super::lexicon::Lexicon;

const POSITIVE_WEIGHT: i64 = 1;
const STRESS_WEIGHT: i64 = -2;

/// Scores text against a shared lexicon.
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer<'a> {
    lexicon: &'a Lexicon,
}

impl Default for SentimentScorer<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl<'a> SentimentScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// +1 per positive word present, -2 per stress word present. Empty text scores 0.
    pub fn score(&self, text: &str) -> i64 {
        let normalized = text.to_lowercase();

        let positive = Self::count_matches(&normalized, self.lexicon.positive_words());
        let stress = Self::count_matches(&normalized, self.lexicon.stress_words());

        positive * POSITIVE_WEIGHT + stress * STRESS_WEIGHT
    }

    fn count_matches(text: &str, words: &[String]) -> i64 {
        words
            .iter()
            .filter(|w| text.contains(w.as_str()))
            .count() as i64
    }
}
