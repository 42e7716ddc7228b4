use std::collections::HashMap;

/// Represents a context in an n-gram model.
///
/// A `State` corresponds to a fixed (n-1)-character prefix (`key`) and stores
/// all observed transitions from this prefix to the next character.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during training
/// - Answer the n-gram count and context count used by probabilities
/// - Merge with another state having the same key (parallel training)
///
/// ## Invariants
/// - Each transition occurrence count is strictly positive
/// - `total` is the sum of all transition counts
#[derive(Clone, Debug)]
pub(crate) struct State {
	/// Identifier of the state (n-1 character prefix).
	key: String,
	/// Outgoing transitions indexed by the next character.
	/// Example: { 'e' => 42, 'a' => 3 }
	transitions: HashMap<char, usize>,
	/// Number of times the prefix was followed by anything.
	total: usize,
}

impl State {
	/// Creates a new empty state for the given prefix.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: HashMap::new(),
			total: 0,
		}
	}

	/// Records an occurrence of a transition toward `next_char`.
	pub fn add_transition(&mut self, next_char: char) {
		*self.transitions.entry(next_char).or_insert(0) += 1;
		self.total += 1;
	}

	/// Number of times `next_char` followed this prefix.
	pub fn count(&self, next_char: char) -> usize {
		self.transitions.get(&next_char).copied().unwrap_or(0)
	}

	/// Number of times this prefix was seen as an n-gram context.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Merges another state into this one.
	///
	/// Both states must represent the same prefix (`key`).
	/// Transition occurrence counts are summed.
	///
	/// # Errors
	/// Returns an error if the state keys do not match.
	pub fn merge(&mut self, other: &Self) -> Result<(), String> {
		if self.key != other.key {
			return Err(format!("Key mismatch: {:?} != {:?}", self.key, other.key));
		}

		for (next_char, occurrence) in &other.transitions {
			*self.transitions.entry(*next_char).or_insert(0) += *occurrence;
		}
		self.total += other.total;

		Ok(())
	}
}
