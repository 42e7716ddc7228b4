use proptest::prelude::*;
use rs_complete_core::{EditSession, KeyEvent, LanguageModel};

// --- STRATEGIES ---

prop_compose! {
	fn arb_corpus()(
		words in proptest::collection::vec("[a-e]{1,8}", 1..40),
	) -> String {
		words.join(" ")
	}
}

fn arb_key_event() -> impl Strategy<Value = KeyEvent> {
	prop_oneof![
		4 => "[a-e ]".prop_map(|s: String| KeyEvent::Char(s.chars().next().unwrap_or(' '))),
		1 => Just(KeyEvent::Backspace),
		1 => Just(KeyEvent::Left),
		1 => Just(KeyEvent::Right),
		1 => Just(KeyEvent::CycleSuggestion),
		1 => Just(KeyEvent::AcceptSuggestion),
		1 => Just(KeyEvent::Resize),
	]
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(200))]

	#[test]
	fn seen_words_have_positive_probability(corpus in arb_corpus(), order in 2usize..5) {
		let model = LanguageModel::train(&corpus, order).unwrap();
		for word in corpus.split_whitespace() {
			prop_assert!(model.probability(word) > 0.0, "P({}) == 0", word);
		}
	}

	#[test]
	fn probability_is_idempotent(corpus in arb_corpus(), word in "[a-f]{0,10}") {
		let model = LanguageModel::train(&corpus, 3).unwrap();
		let first = model.probability(&word);
		prop_assert_eq!(first.to_bits(), model.probability(&word).to_bits());
		prop_assert!((0.0..=1.0).contains(&first));
	}

	#[test]
	fn ranking_is_sorted_and_bounded(corpus in arb_corpus(), prefix in "[a-e]{0,2}", k in 0usize..12) {
		let model = LanguageModel::train(&corpus, 2).unwrap();
		let candidates = model.candidates_for(&prefix).count();
		let ranked = model.ranked_with_probability(&prefix, k);

		prop_assert!(ranked.len() <= k);
		prop_assert!(ranked.len() <= candidates);
		prop_assert_eq!(ranked.len(), k.min(candidates));
		for pair in ranked.windows(2) {
			prop_assert!(pair[0].1 >= pair[1].1);
		}
		for (word, _) in &ranked {
			prop_assert!(word.starts_with(prefix.as_str()));
		}
	}

	#[test]
	fn unmatched_prefix_yields_nothing(corpus in arb_corpus(), prefix in "[f-z][a-z]{0,3}", k in 0usize..12) {
		let model = LanguageModel::train(&corpus, 2).unwrap();
		prop_assert!(model.ranked_top_k(&prefix, k).is_empty());
		prop_assert_eq!(model.best_match(&prefix), prefix);
	}

	#[test]
	fn prefix_counts_sum_ngram_counts(corpus in arb_corpus()) {
		let model = LanguageModel::train(&corpus, 2).unwrap();
		for context in "abcde".chars() {
			let context = context.to_string();
			let sum: usize = "abcde\u{3}"
				.chars()
				.map(|next| model.ngram_count(&format!("{context}{next}")))
				.sum();
			prop_assert_eq!(model.prefix_count(&context), sum);
		}
	}

	#[test]
	fn session_invariants_hold(corpus in arb_corpus(), events in proptest::collection::vec(arb_key_event(), 0..60)) {
		let model = LanguageModel::train(&corpus, 2).unwrap();
		let mut session = EditSession::new(&model, 5);
		let mut letters = 0;
		let mut tabs = 0;

		for event in events {
			let state = session.dispatch(event);
			match event {
				KeyEvent::Char(_) => letters += 1,
				KeyEvent::CycleSuggestion => tabs += 1,
				_ => (),
			}

			prop_assert!(state.cursor <= state.buffer.chars().count());
			prop_assert!(state.suggestions.len() <= 5);
			prop_assert!(state.suggestions.is_empty() || state.cycle_index < state.suggestions.len());
			prop_assert_eq!(state.metrics.letters_typed, letters);
			prop_assert_eq!(state.metrics.tab_presses, tabs);
			prop_assert!(state.is_active);
		}
	}
}
