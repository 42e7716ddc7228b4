use log::debug;
use serde::Serialize;

use super::key_event::{is_printable, KeyEvent};
use super::metrics::{Metrics, MetricsSnapshot};
use crate::config::CompletionConfig;
use crate::model::language_model::LanguageModel;

/// Lifecycle of a session. `Terminated` is absorbing.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
	Active,
	Terminated,
}

/// What the renderer reads after each key event.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SessionState {
	pub buffer: String,
	pub cursor: usize,
	pub suggestions: Vec<String>,
	pub cycle_index: usize,
	pub metrics: MetricsSnapshot,
	pub is_active: bool,
}

/// One interactive completion session over a shared, read-only model.
///
/// # Responsibilities
/// - Apply key events to the input buffer and cursor
/// - Re-query the model for the word under the cursor after every edit
/// - Track the suggestion cycle and usage metrics
///
/// # Invariants
/// - `cursor <= buffer.len()` (in characters)
/// - `cycle_index < suggestions.len()` whenever suggestions exist, 0 otherwise
/// - No mutation happens once the session is `Terminated`
#[derive(Debug)]
pub struct EditSession<'m> {
	model: &'m LanguageModel,
	top_k: usize,
	buffer: Vec<char>,
	cursor: usize,
	suggestions: Vec<String>,
	cycle_index: usize,
	metrics: Metrics,
	status: Status,
}

impl<'m> EditSession<'m> {
	/// Starts an empty session offering at most `top_k` suggestions.
	pub fn new(model: &'m LanguageModel, top_k: usize) -> Self {
		Self {
			model,
			top_k,
			buffer: Vec::new(),
			cursor: 0,
			suggestions: Vec::new(),
			cycle_index: 0,
			metrics: Metrics::default(),
			status: Status::Active,
		}
	}

	pub fn with_config(model: &'m LanguageModel, config: &CompletionConfig) -> Self {
		Self::new(model, config.top_k)
	}

	/// Applies one key event and returns the resulting observable state.
	///
	/// Events received after `Quit` are ignored.
	pub fn dispatch(&mut self, event: KeyEvent) -> SessionState {
		if self.is_active() {
			match event {
				KeyEvent::Char(c) => self.insert_char(c),
				KeyEvent::Backspace => self.backspace(),
				KeyEvent::Left => self.move_left(),
				KeyEvent::Right => self.move_right(),
				KeyEvent::CycleSuggestion => self.cycle_suggestion(),
				KeyEvent::AcceptSuggestion => self.accept_suggestion(),
				KeyEvent::Quit => self.quit(),
				KeyEvent::Resize => (),
			}
			debug!(
				"{:?} -> cursor {}, {} suggestions, cycle {}",
				event,
				self.cursor,
				self.suggestions.len(),
				self.cycle_index
			);
		} else {
			debug!("{:?} ignored, session terminated", event);
		}

		self.state()
	}

	/// Inserts a printable ASCII character at the cursor.
	pub fn insert_char(&mut self, c: char) {
		if !self.is_active() || !is_printable(&c) {
			return;
		}
		self.buffer.insert(self.cursor, c);
		self.cursor += 1;
		self.metrics.record_letter();
		self.refresh_suggestions();
	}

	/// Deletes the character before the cursor. No-op at offset 0.
	pub fn backspace(&mut self) {
		if !self.is_active() || self.cursor == 0 {
			return;
		}
		self.cursor -= 1;
		self.buffer.remove(self.cursor);
		self.refresh_suggestions();
	}

	pub fn move_left(&mut self) {
		if !self.is_active() {
			return;
		}
		self.cursor = self.cursor.saturating_sub(1);
		self.refresh_suggestions();
	}

	pub fn move_right(&mut self) {
		if !self.is_active() {
			return;
		}
		self.cursor = (self.cursor + 1).min(self.buffer.len());
		self.refresh_suggestions();
	}

	/// Selects the next suggestion, wrapping around. Always counts a tab press.
	pub fn cycle_suggestion(&mut self) {
		if !self.is_active() {
			return;
		}
		if !self.suggestions.is_empty() {
			self.cycle_index = (self.cycle_index + 1) % self.suggestions.len();
		}
		self.metrics.record_tab();
	}

	/// Replaces the word under the cursor with the selected suggestion.
	///
	/// Text after the cursor is kept. No-op without suggestions.
	pub fn accept_suggestion(&mut self) {
		if !self.is_active() {
			return;
		}
		let Some(chosen) = self.suggestions.get(self.cycle_index).cloned() else {
			return;
		};

		let start = self.word_start();
		let inserted = chosen.chars().count();
		self.buffer.splice(start..self.cursor, chosen.chars());
		self.cursor = start + inserted;
		self.suggestions.clear();
		self.cycle_index = 0;
	}

	/// Ends the session. Every later operation is a no-op.
	pub fn quit(&mut self) {
		self.status = Status::Terminated;
	}

	pub fn is_active(&self) -> bool {
		self.status == Status::Active
	}

	pub fn status(&self) -> Status {
		self.status
	}

	pub fn buffer(&self) -> String {
		self.buffer.iter().collect()
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn suggestions(&self) -> &[String] {
		&self.suggestions
	}

	pub fn cycle_index(&self) -> usize {
		self.cycle_index
	}

	/// The suggestion `accept_suggestion` would insert.
	pub fn selected_suggestion(&self) -> Option<&str> {
		self.suggestions.get(self.cycle_index).map(String::as_str)
	}

	/// Offset where the word ending at the cursor begins.
	pub fn word_start(&self) -> usize {
		self.buffer[..self.cursor]
			.iter()
			.rposition(|c| c.is_whitespace())
			.map_or(0, |space| space + 1)
	}

	/// The run of non-whitespace characters ending exactly at the cursor.
	pub fn current_word(&self) -> String {
		self.buffer[self.word_start()..self.cursor].iter().collect()
	}

	pub fn current_metrics(&self) -> MetricsSnapshot {
		self.metrics.snapshot(&self.buffer())
	}

	pub fn state(&self) -> SessionState {
		SessionState {
			buffer: self.buffer(),
			cursor: self.cursor,
			suggestions: self.suggestions.clone(),
			cycle_index: self.cycle_index,
			metrics: self.current_metrics(),
			is_active: self.is_active(),
		}
	}

	fn refresh_suggestions(&mut self) {
		let word = self.current_word();
		self.suggestions = self.model.ranked_top_k(&word, self.top_k);
		self.cycle_index = 0;
	}
}
