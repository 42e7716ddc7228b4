use std::collections::HashMap;

use super::state::State;
use super::{END_CHAR, START_CHAR};
use crate::config::check_order;
use crate::error::{CompletionError, CompletionResult};

/// Character n-gram counts over padded words.
///
/// Every word is counted as `START_CHAR * (n-1) + word + END_CHAR`, so each
/// real character, and the end of the word, is predicted from a full
/// `n-1` character context.
///
/// # Responsibilities
/// - Count every length-`n` window of every padded word
/// - Answer n-gram and context counts
/// - Score a whole word as the product of its conditional probabilities
/// - Merge with another model of the same order `n`
///
/// # Invariants
/// - `n` is always >= 2 and never changes
/// - Each state in `states` corresponds to a unique prefix of length `n-1`
/// - A state's total equals the sum of the n-gram counts sharing its prefix
#[derive(Clone, Debug)]
pub struct NGramModel {
	/// The order of the model (number of characters in the n-gram)
	n: usize,

	/// Mapping from a prefix (length n-1) to its corresponding state
	states: HashMap<String, State>,
}

impl NGramModel {
	/// Creates a new, empty n-gram model of order `n`.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `n < 2`.
	pub fn new(n: usize) -> CompletionResult<Self> {
		check_order(n)?;
		Ok(Self { n, states: HashMap::new() })
	}

	/// Order of the model.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Number of distinct contexts seen during training.
	pub fn context_count(&self) -> usize {
		self.states.len()
	}

	fn pad(&self, word: &str) -> Vec<char> {
		std::iter::repeat_n(START_CHAR, self.n - 1)
			.chain(word.chars())
			.chain(std::iter::once(END_CHAR))
			.collect()
	}

	/// Adds one word to the counts.
	pub fn add_word(&mut self, word: &str) {
		let padded = self.pad(word);

		for window in padded.windows(self.n) {
			let (context, next) = window.split_at(self.n - 1);
			let prefix: String = context.iter().collect();

			let state = self.states.entry(prefix).or_insert_with_key(|key| State::new(key));
			state.add_transition(next[0]);
		}
	}

	/// Number of times the `n`-character sequence `gram` was counted.
	///
	/// Sequences of any other length were never counted and yield 0.
	pub fn ngram_count(&self, gram: &str) -> usize {
		let chars: Vec<char> = gram.chars().collect();
		if chars.len() != self.n {
			return 0;
		}
		let prefix: String = chars[..self.n - 1].iter().collect();
		self.states.get(&prefix).map_or(0, |state| state.count(chars[self.n - 1]))
	}

	/// Number of times the `n-1`-character sequence `prefix` was used as a context.
	pub fn prefix_count(&self, prefix: &str) -> usize {
		self.states.get(prefix).map_or(0, State::total)
	}

	/// Probability of a whole word.
	///
	/// Product over every window of `count(window) / count(context)`,
	/// accumulated in log space. An unseen context or an unseen n-gram makes
	/// the whole word score exactly `0.0`; there is no smoothing.
	pub fn probability(&self, word: &str) -> f64 {
		let padded = self.pad(word);

		let mut log_prob = 0.0_f64;
		for window in padded.windows(self.n) {
			let (context, next) = window.split_at(self.n - 1);
			let prefix: String = context.iter().collect();

			let Some(state) = self.states.get(&prefix) else {
				return 0.0;
			};
			let count = state.count(next[0]);
			if state.total() == 0 || count == 0 {
				return 0.0;
			}
			log_prob += (count as f64 / state.total() as f64).ln();
		}

		log_prob.exp()
	}

	/// Merges another n-gram model into this one.
	///
	/// Occurrence counts for matching states and transitions are summed.
	///
	/// # Errors
	/// Returns `OrderMismatch` if the model orders differ.
	pub fn merge(&mut self, other: &Self) -> CompletionResult<()> {
		if self.n != other.n {
			return Err(CompletionError::OrderMismatch { expected: self.n, found: other.n });
		}

		for (key, state) in &other.states {
			if let Some(existing) = self.states.get_mut(key) {
				existing.merge(state).map_err(CompletionError::Merge)?;
			} else {
				self.states.insert(key.clone(), state.clone());
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bigrams(words: &[&str]) -> NGramModel {
		let mut model = NGramModel::new(2).unwrap();
		for word in words {
			model.add_word(word);
		}
		model
	}

	#[test]
	fn order_below_two_is_rejected() {
		assert!(matches!(NGramModel::new(1), Err(CompletionError::InvalidConfiguration(_))));
		assert!(matches!(NGramModel::new(0), Err(CompletionError::InvalidConfiguration(_))));
	}

	#[test]
	fn padding_counts_start_and_end() {
		let model = bigrams(&["cat", "cats", "catalog"]);
		let start = START_CHAR.to_string();

		assert_eq!(model.prefix_count(&start), 3);
		assert_eq!(model.ngram_count(&format!("{START_CHAR}c")), 3);
		assert_eq!(model.ngram_count("at"), 3);
		assert_eq!(model.ngram_count("al"), 1);
		assert_eq!(model.prefix_count("a"), 4);
		assert_eq!(model.ngram_count(&format!("t{END_CHAR}")), 1);
		assert_eq!(model.ngram_count("cat"), 0);
	}

	#[test]
	fn trigram_padding_uses_two_start_markers() {
		let mut model = NGramModel::new(3).unwrap();
		model.add_word("ab");

		let context: String = [START_CHAR, START_CHAR].iter().collect();
		assert_eq!(model.prefix_count(&context), 1);
		assert_eq!(model.ngram_count(&format!("{context}a")), 1);
		assert_eq!(model.ngram_count(&format!("{START_CHAR}ab")), 1);
		assert_eq!(model.ngram_count(&format!("ab{END_CHAR}")), 1);
		assert_eq!(model.context_count(), 3);
	}

	#[test]
	fn probability_is_product_of_conditionals() {
		let model = bigrams(&["cat", "cats", "catalog"]);
		// P(c|^) * P(a|c) * P(t|a) * P($|t) = 1 * 1 * 3/4 * 1/3
		assert!((model.probability("cat") - 0.25).abs() < 1e-12);
	}

	#[test]
	fn unseen_context_scores_zero() {
		let model = bigrams(&["cat"]);
		assert_eq!(model.probability("dog"), 0.0);
		// Known contexts, unseen transition.
		assert_eq!(model.probability("ca"), 0.0);
	}

	#[test]
	fn long_words_do_not_underflow() {
		let word = "ab".repeat(300);
		let model = bigrams(&[&word]);
		assert!(model.probability(&word) > 0.0);
	}

	#[test]
	fn merge_equals_sequential_build() {
		let mut left = bigrams(&["cat", "cats"]);
		let right = bigrams(&["catalog"]);
		left.merge(&right).unwrap();

		let whole = bigrams(&["cat", "cats", "catalog"]);
		assert_eq!(left.probability("cat"), whole.probability("cat"));
		assert_eq!(left.prefix_count("a"), whole.prefix_count("a"));
	}

	#[test]
	fn merge_rejects_other_order() {
		let mut left = NGramModel::new(2).unwrap();
		let right = NGramModel::new(3).unwrap();
		assert!(matches!(
			left.merge(&right),
			Err(CompletionError::OrderMismatch { expected: 2, found: 3 })
		));
	}
}
