//! Top-level module for the completion model.
//!
//! - Per-context transition tables (`State`)
//! - Fixed-order character n-gram counts (`NGramModel`)
//! - The distinct-word set and prefix lookup (`Vocabulary`)
//! - The trained, read-only model used by sessions (`LanguageModel`)

/// Trained language model: training, probability, ranking.
pub mod language_model;

/// Fixed-order n-gram counts over padded words (`n >= 2`).
///
/// Handles padding, window counting, word probability and merging.
pub mod ngram_model;

/// Ordered distinct-word set with prefix lookup.
pub mod vocabulary;

/// Internal representation of a single n-gram context (prefix).
///
/// Tracks outgoing transitions and their total.
/// This module is not exposed publicly.
mod state;

/// Marker prepended `n-1` times to every word before counting.
pub const START_CHAR: char = '\u{2}';

/// Marker appended once to every word before counting.
pub const END_CHAR: char = '\u{3}';
