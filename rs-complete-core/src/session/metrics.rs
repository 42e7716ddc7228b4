use serde::Serialize;

/// Usage counters of one session. Never decrease.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
	letters_typed: u64,
	tab_presses: u64,
}

/// Counters plus their averages over the words currently in the buffer.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct MetricsSnapshot {
	pub letters_typed: u64,
	pub tab_presses: u64,
	pub avg_letters_per_word: f64,
	pub avg_tabs_per_word: f64,
}

impl Metrics {
	pub fn record_letter(&mut self) {
		self.letters_typed += 1;
	}

	pub fn record_tab(&mut self) {
		self.tab_presses += 1;
	}

	pub fn letters_typed(&self) -> u64 {
		self.letters_typed
	}

	pub fn tab_presses(&self) -> u64 {
		self.tab_presses
	}

	/// Derives the averages against the whitespace-split words of `buffer`.
	///
	/// Both averages are `0.0` when the buffer has no word.
	pub fn snapshot(&self, buffer: &str) -> MetricsSnapshot {
		let words = buffer.split_whitespace().count();
		let (avg_letters_per_word, avg_tabs_per_word) = if words > 0 {
			(
				self.letters_typed as f64 / words as f64,
				self.tab_presses as f64 / words as f64,
			)
		} else {
			(0.0, 0.0)
		};

		MetricsSnapshot {
			letters_typed: self.letters_typed,
			tab_presses: self.tab_presses,
			avg_letters_per_word,
			avg_tabs_per_word,
		}
	}
}
