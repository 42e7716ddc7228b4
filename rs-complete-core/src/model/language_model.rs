use std::sync::mpsc;
use std::thread;

use log::{debug, info};

use super::ngram_model::NGramModel;
use super::vocabulary::{CandidateSource, Vocabulary};
use crate::error::CompletionResult;

/// Number of training chunks per CPU.
const CHUNK_FACTOR: usize = 8;

/// Trained character n-gram language model.
///
/// Built once from a corpus and read-only afterwards; sessions borrow it.
///
/// # Responsibilities
/// - Train n-gram counts and the vocabulary from whitespace-split tokens
/// - Score words (`probability`)
/// - Filter the vocabulary by prefix and rank the candidates
#[derive(Clone, Debug)]
pub struct LanguageModel {
	ngrams: NGramModel,
	vocabulary: Vocabulary,
}

impl LanguageModel {
	/// Trains a model of order `order` on `corpus`.
	///
	/// Tokens are split into chunks trained on worker threads; the partial
	/// models are merged in chunk order, which gives the same counts as a
	/// sequential pass.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `order < 2`. No model is built.
	pub fn train(corpus: &str, order: usize) -> CompletionResult<Self> {
		let mut model = Self::empty(order)?;

		let tokens: Vec<&str> = corpus.split_whitespace().collect();
		if tokens.is_empty() {
			info!("Trained order-{order} model on an empty corpus");
			return Ok(model);
		}

		let chunks = num_cpus::get() * CHUNK_FACTOR;
		let chunk_size = tokens.len().div_ceil(chunks);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for (index, chunk) in tokens.chunks(chunk_size).enumerate() {
				let tx = tx.clone();
				scope.spawn(move || {
					let partial = Self::train_chunk(chunk, order);
					// The receiver outlives the scope; a send cannot fail here.
					let _ = tx.send((index, partial));
				});
			}
		});
		drop(tx);

		let mut partials: Vec<_> = rx.iter().collect();
		partials.sort_by_key(|(index, _)| *index);
		let chunk_count = partials.len();

		for (_, partial) in partials {
			model.merge(&partial?)?;
		}

		info!(
			"Trained order-{} model: {} tokens, {} words, {} contexts, {} chunks",
			order,
			tokens.len(),
			model.vocabulary.len(),
			model.ngrams.context_count(),
			chunk_count
		);

		Ok(model)
	}

	fn empty(order: usize) -> CompletionResult<Self> {
		Ok(Self {
			ngrams: NGramModel::new(order)?,
			vocabulary: Vocabulary::new(),
		})
	}

	fn train_chunk(tokens: &[&str], order: usize) -> CompletionResult<Self> {
		let mut partial = Self::empty(order)?;
		for token in tokens {
			partial.vocabulary.insert(token);
			partial.ngrams.add_word(token);
		}
		Ok(partial)
	}

	/// Merges another model of the same order into this one.
	///
	/// # Errors
	/// Returns `OrderMismatch` if the orders differ.
	pub fn merge(&mut self, other: &Self) -> CompletionResult<()> {
		self.ngrams.merge(&other.ngrams)?;
		self.vocabulary.merge(&other.vocabulary);
		Ok(())
	}

	/// Order of the underlying n-gram model.
	pub fn order(&self) -> usize {
		self.ngrams.order()
	}

	/// Number of distinct words seen in the corpus.
	pub fn vocabulary_len(&self) -> usize {
		self.vocabulary.len()
	}

	/// Read-only access to the vocabulary.
	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	/// Number of times the `order`-character sequence `gram` was counted.
	pub fn ngram_count(&self, gram: &str) -> usize {
		self.ngrams.ngram_count(gram)
	}

	/// Number of times `prefix` (length `order-1`) was used as a context.
	pub fn prefix_count(&self, prefix: &str) -> usize {
		self.ngrams.prefix_count(prefix)
	}

	/// Probability of `word` under the model, `0.0` when any part is unseen.
	pub fn probability(&self, word: &str) -> f64 {
		self.ngrams.probability(word)
	}

	/// Every vocabulary word starting with `prefix`, in vocabulary order.
	pub fn candidates_for<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.vocabulary.candidates_for(prefix)
	}

	/// Up to `k` candidates for `prefix` with their probabilities.
	///
	/// Sorted by descending probability; equal probabilities keep vocabulary order.
	pub fn ranked_with_probability(&self, prefix: &str, k: usize) -> Vec<(String, f64)> {
		if k == 0 {
			return Vec::new();
		}

		let mut scored: Vec<(String, f64)> = self
			.candidates_for(prefix)
			.map(|word| (word.to_owned(), self.probability(word)))
			.collect();

		// Stable sort: ties stay in vocabulary order.
		scored.sort_by(|a, b| b.1.total_cmp(&a.1));
		scored.truncate(k);

		debug!("Ranked {} candidates for {:?}", scored.len(), prefix);
		scored
	}

	/// Up to `k` most probable vocabulary words starting with `prefix`.
	///
	/// Empty when nothing matches or `k == 0`.
	pub fn ranked_top_k(&self, prefix: &str, k: usize) -> Vec<String> {
		self.ranked_with_probability(prefix, k)
			.into_iter()
			.map(|(word, _)| word)
			.collect()
	}

	/// The most probable vocabulary word starting with `prefix`.
	///
	/// Falls back to `prefix` itself when no word matches.
	pub fn best_match(&self, prefix: &str) -> String {
		let mut best: Option<(&str, f64)> = None;
		for word in self.candidates_for(prefix) {
			let probability = self.probability(word);
			match best {
				Some((_, best_probability)) if probability <= best_probability => (),
				_ => best = Some((word, probability)),
			}
		}

		best.map_or_else(|| prefix.to_owned(), |(word, _)| word.to_owned())
	}
}
