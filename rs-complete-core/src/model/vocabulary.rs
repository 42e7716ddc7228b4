use std::collections::BTreeSet;
use std::ops::Bound;

/// Anything that can list the known words starting with a prefix.
///
/// Callers rank on top of this; the order of the returned words is the
/// tie-break order for equal scores and must be deterministic.
pub trait CandidateSource {
	/// Every known word starting with `prefix`. An empty prefix matches all words.
	fn candidates_for<'a>(&'a self, prefix: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

/// Set of distinct words observed in a corpus.
///
/// Words are kept in lexicographic order, so all words sharing a prefix
/// form one contiguous range and a lookup never scans the whole set.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
	words: BTreeSet<String>,
}

impl Vocabulary {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a word. Returns `false` if it was already present.
	pub fn insert(&mut self, word: &str) -> bool {
		if self.words.contains(word) {
			return false;
		}
		self.words.insert(word.to_owned())
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}

	/// Adds every word of `other`.
	pub fn merge(&mut self, other: &Self) {
		self.words.extend(other.words.iter().cloned());
	}
}

impl CandidateSource for Vocabulary {
	fn candidates_for<'a>(&'a self, prefix: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
		Box::new(
			self.words
				.range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
				.take_while(move |word| word.starts_with(prefix))
				.map(String::as_str),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn vocabulary(words: &[&str]) -> Vocabulary {
		let mut vocabulary = Vocabulary::new();
		for word in words {
			vocabulary.insert(word);
		}
		vocabulary
	}

	#[test]
	fn duplicates_collapse() {
		let mut vocabulary = Vocabulary::new();
		assert!(vocabulary.insert("cat"));
		assert!(!vocabulary.insert("cat"));
		assert_eq!(vocabulary.len(), 1);
	}

	#[test]
	fn candidates_are_the_prefix_range() {
		let vocabulary = vocabulary(&["dog", "cat", "catalog", "car", "cats", "cb"]);
		let found: Vec<&str> = vocabulary.candidates_for("cat").collect();
		assert_eq!(found, vec!["cat", "catalog", "cats"]);
	}

	#[test]
	fn empty_prefix_matches_everything() {
		let vocabulary = vocabulary(&["b", "a"]);
		let found: Vec<&str> = vocabulary.candidates_for("").collect();
		assert_eq!(found, vec!["a", "b"]);
	}

	#[test]
	fn unknown_prefix_has_no_candidates() {
		let vocabulary = vocabulary(&["cat"]);
		assert_eq!(vocabulary.candidates_for("z").count(), 0);
		assert_eq!(vocabulary.candidates_for("cats").count(), 0);
	}
}
