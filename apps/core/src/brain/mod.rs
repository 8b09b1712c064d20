//! # Brain Module
//!
//! Fast, keyword-based analysis of user messages.
//!
//! ## Components
//! - `lexicon`: stress/positive keyword sets and tip pools
//! - `scorer`: text to integer sentiment score
//! - `classifier`: score to stress level
//! - `tips`: random tip selection with an injected random source
//! - `reply`: reply text and reply type per stress level

pub mod classifier;
pub mod lexicon;
pub mod reply;
pub mod scorer;
pub mod tips;

pub use classifier::classify;
pub use lexicon::Lexicon;
pub use scorer::SentimentScorer;
pub use tips::{TipPair, TipSelector};
