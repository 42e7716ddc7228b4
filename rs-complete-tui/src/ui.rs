use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;
use rs_complete_core::session::metrics::MetricsSnapshot;
use rs_complete_core::EditSession;

const PROMPT: &str = "> ";
const ELLIPSIS: &str = "...";

/// Draws the session in four stacked panels: suggestions, reference text,
/// input and scores.
pub struct TerminalUi {
	out: Stdout,
	text_content: String,
}

impl TerminalUi {
	pub fn new(text_content: String) -> Self {
		Self { out: io::stdout(), text_content }
	}

	/// Redraws every panel from the session's current state.
	pub fn draw(&mut self, session: &EditSession<'_>) -> io::Result<()> {
		let (width, height) = terminal::size()?;
		let (width, height) = (width as usize, height as usize);
		let layout = Layout::new(height);

		queue!(self.out, Clear(ClearType::All))?;

		self.title(layout.suggestions, width, "Suggestions")?;
		let suggestions = format_suggestions(session.suggestions(), session.cycle_index(), width);
		queue!(self.out, MoveTo(0, row(layout.suggestions + 1)), Print(suggestions))?;

		self.title(layout.text, width, "Text Content")?;
		for (i, line) in wrap_words(&self.text_content, width).iter().take(layout.text_rows).enumerate() {
			queue!(self.out, MoveTo(0, row(layout.text + 1 + i)), Print(line))?;
		}

		self.title(layout.input, width, "Input")?;
		let buffer = session.buffer();
		for (i, line) in input_lines(&buffer, width).iter().take(layout.input_rows).enumerate() {
			let line = if i == 0 { format!("{PROMPT}{line}") } else { line.clone() };
			queue!(self.out, MoveTo(0, row(layout.input + 1 + i)), Print(line))?;
		}

		self.title(layout.scores, width, "Scores")?;
		let scores = format_scores(&session.current_metrics(), width);
		queue!(self.out, MoveTo(0, row(layout.scores + 1)), Print(scores))?;

		let (col, line) = cursor_position(session.cursor(), width);
		let line = line.min(layout.input_rows.saturating_sub(1));
		queue!(self.out, MoveTo(col.min(width.saturating_sub(1)) as u16, row(layout.input + 1 + line)))?;

		self.out.flush()
	}

	fn title(&mut self, at: usize, width: usize, name: &str) -> io::Result<()> {
		let label = format!("── {name} ");
		let fill = width.saturating_sub(label.chars().count());
		queue!(
			self.out,
			MoveTo(0, row(at)),
			SetAttribute(Attribute::Bold),
			Print(label),
			Print("─".repeat(fill)),
			SetAttribute(Attribute::Reset)
		)
	}
}

fn row(y: usize) -> u16 {
	u16::try_from(y).unwrap_or(u16::MAX)
}

/// First row of each panel and the number of content rows it gets.
struct Layout {
	suggestions: usize,
	text: usize,
	text_rows: usize,
	input: usize,
	input_rows: usize,
	scores: usize,
}

impl Layout {
	fn new(height: usize) -> Self {
		// Suggestions and scores take a title plus one line each.
		let middle = height.saturating_sub(4);
		let text_rows = (middle / 2).saturating_sub(1);
		let input_rows = middle.saturating_sub(text_rows + 2).max(1);
		Self {
			suggestions: 0,
			text: 2,
			text_rows,
			input: 3 + text_rows,
			input_rows,
			scores: 4 + text_rows + input_rows,
		}
	}
}

/// Truncates `line` to `width` characters, marking the cut with an ellipsis.
fn fit(line: String, width: usize) -> String {
	if line.chars().count() <= width {
		return line;
	}
	let keep = width.saturating_sub(ELLIPSIS.len());
	line.chars().take(keep).chain(ELLIPSIS.chars()).take(width).collect()
}

/// Suggestions on one line, the selected one in brackets.
pub fn format_suggestions(suggestions: &[String], selected: usize, width: usize) -> String {
	if suggestions.is_empty() {
		return "No suggestions".to_owned();
	}
	let line = suggestions
		.iter()
		.enumerate()
		.map(|(i, word)| if i == selected { format!("[{word}]") } else { word.clone() })
		.collect::<Vec<_>>()
		.join(" ");
	fit(line, width)
}

pub fn format_scores(metrics: &MetricsSnapshot, width: usize) -> String {
	let line = format!(
		"Total Letters Typed: {} | Total Tab Presses: {} | Avg Letters/Word: {:.2} | Avg Tabs/Word: {:.2}",
		metrics.letters_typed, metrics.tab_presses, metrics.avg_letters_per_word, metrics.avg_tabs_per_word
	);
	fit(line, width)
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current = String::new();

	for word in text.split_whitespace() {
		if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
			lines.push(std::mem::take(&mut current));
		}
		if !current.is_empty() {
			current.push(' ');
		}
		current.push_str(word);
	}
	if !current.is_empty() {
		lines.push(current);
	}

	lines
}

/// Splits the input buffer into display lines; the first one leaves room for the prompt.
pub fn input_lines(buffer: &str, width: usize) -> Vec<String> {
	let chars: Vec<char> = buffer.chars().collect();
	let first = width.saturating_sub(PROMPT.len()).max(1);
	let rest = width.max(1);

	let mut lines = vec![chars.iter().take(first).collect::<String>()];
	let mut offset = first;
	while offset < chars.len() {
		lines.push(chars[offset..(offset + rest).min(chars.len())].iter().collect());
		offset += rest;
	}
	lines
}

/// Column and line (within the input panel) of a buffer offset.
pub fn cursor_position(cursor: usize, width: usize) -> (usize, usize) {
	let first = width.saturating_sub(PROMPT.len()).max(1);
	let rest = width.max(1);

	if cursor < first {
		(PROMPT.len() + cursor, 0)
	} else {
		let offset = cursor - first;
		(offset % rest, 1 + offset / rest)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selected_suggestion_is_bracketed() {
		let words = vec!["cat".to_owned(), "cats".to_owned()];
		assert_eq!(format_suggestions(&words, 1, 80), "cat [cats]");
		assert_eq!(format_suggestions(&[], 0, 80), "No suggestions");
	}

	#[test]
	fn long_lines_are_cut() {
		let words = vec!["catalogue".to_owned(), "categories".to_owned()];
		assert_eq!(format_suggestions(&words, 0, 10), "[catalo...");
	}

	#[test]
	fn scores_show_two_decimals() {
		let metrics = MetricsSnapshot {
			letters_typed: 7,
			tab_presses: 1,
			avg_letters_per_word: 3.5,
			avg_tabs_per_word: 0.5,
		};
		let line = format_scores(&metrics, 200);
		assert!(line.contains("Avg Letters/Word: 3.50"));
		assert!(line.contains("Total Tab Presses: 1"));
	}

	#[test]
	fn words_wrap_at_width() {
		assert_eq!(wrap_words("the cat sat on the mat", 7), vec!["the cat", "sat on", "the mat"]);
		assert!(wrap_words("   ", 10).is_empty());
	}

	#[test]
	fn input_wraps_after_prompt() {
		assert_eq!(input_lines("abcdefgh", 5), vec!["abc", "defgh"]);
		assert_eq!(input_lines("", 5), vec![""]);
		assert_eq!(cursor_position(2, 5), (4, 0));
		assert_eq!(cursor_position(3, 5), (0, 1));
		assert_eq!(cursor_position(9, 5), (1, 2));
	}
}
