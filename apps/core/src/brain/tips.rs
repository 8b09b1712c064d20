//! Random tip selection for replies.

use super::lexicon::Lexicon;
use rand::seq::SliceRandom;
use rand::Rng;

/// A pair of tips attached to one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipPair {
    pub learning_tip: String,
    pub wellness_tip: String,
}

/// Draws one microlearning tip and one wellness tip, uniformly and independently.
#[derive(Debug, Clone, Copy)]
pub struct TipSelector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TipSelector<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Picks from both pools with the given random source. An empty pool yields an empty tip.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> TipPair {
        TipPair {
            learning_tip: Self::choose(self.lexicon.microlearning_tips(), rng),
            wellness_tip: Self::choose(self.lexicon.wellness_tips(), rng),
        }
    }

    fn choose<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> String {
        pool.choose(rng).cloned().unwrap_or_default()
    }
}
