use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use rs_complete_core::KeyEvent;

/// Translates a terminal event into a session key event.
///
/// Returns `None` for events without a binding (mouse, focus, key releases,
/// unmapped keys).
pub fn translate(event: &Event) -> Option<KeyEvent> {
	match event {
		Event::Resize(_, _) => Some(KeyEvent::Resize),
		Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(KeyEvent::Quit),
			KeyCode::Char(c) => Some(KeyEvent::Char(c)),
			KeyCode::Backspace => Some(KeyEvent::Backspace),
			KeyCode::Left => Some(KeyEvent::Left),
			KeyCode::Right => Some(KeyEvent::Right),
			KeyCode::Tab => Some(KeyEvent::CycleSuggestion),
			KeyCode::Enter => Some(KeyEvent::AcceptSuggestion),
			KeyCode::Esc => Some(KeyEvent::Quit),
			_ => None,
		},
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossterm::event::KeyEvent as TermKeyEvent;

	fn key(code: KeyCode) -> Event {
		Event::Key(TermKeyEvent::new(code, KeyModifiers::NONE))
	}

	#[test]
	fn bindings_match_the_original_layout() {
		assert_eq!(translate(&key(KeyCode::Tab)), Some(KeyEvent::CycleSuggestion));
		assert_eq!(translate(&key(KeyCode::Enter)), Some(KeyEvent::AcceptSuggestion));
		assert_eq!(translate(&key(KeyCode::Esc)), Some(KeyEvent::Quit));
		assert_eq!(translate(&key(KeyCode::Char('q'))), Some(KeyEvent::Char('q')));
		assert_eq!(translate(&key(KeyCode::Up)), None);
		assert_eq!(translate(&Event::Resize(80, 24)), Some(KeyEvent::Resize));
	}

	#[test]
	fn ctrl_c_quits() {
		let event = Event::Key(TermKeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
		assert_eq!(translate(&event), Some(KeyEvent::Quit));
	}
}
