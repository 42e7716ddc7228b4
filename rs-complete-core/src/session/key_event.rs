/// Raw key codes understood by [`KeyEvent::from_key_code`].
///
/// ASCII control codes plus the curses codes for arrows, backspace and resize.
pub mod key_code {
	pub const BACKSPACE_CTRL_H: u32 = 8;
	pub const TAB: u32 = 9;
	pub const ENTER: u32 = 10;
	pub const ESCAPE: u32 = 27;
	pub const DELETE: u32 = 127;
	pub const LEFT: u32 = 260;
	pub const RIGHT: u32 = 261;
	pub const BACKSPACE: u32 = 263;
	pub const RESIZE: u32 = 410;
}

/// First and last characters accepted as typed input.
pub const PRINTABLE: std::ops::RangeInclusive<char> = ' '..='~';

/// A single keystroke, already decoded by the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
	/// A typed character. Ignored unless it is printable ASCII.
	Char(char),
	Backspace,
	Left,
	Right,
	/// Advance to the next suggestion.
	CycleSuggestion,
	/// Replace the current word with the selected suggestion.
	AcceptSuggestion,
	Quit,
	/// The terminal was resized; only the renderer cares.
	Resize,
}

impl KeyEvent {
	/// Decodes a raw key code.
	///
	/// Returns `None` for codes the session has no binding for.
	pub fn from_key_code(code: u32) -> Option<Self> {
		use key_code::*;

		match code {
			TAB => Some(Self::CycleSuggestion),
			ENTER => Some(Self::AcceptSuggestion),
			ESCAPE => Some(Self::Quit),
			BACKSPACE | DELETE | BACKSPACE_CTRL_H => Some(Self::Backspace),
			LEFT => Some(Self::Left),
			RIGHT => Some(Self::Right),
			RESIZE => Some(Self::Resize),
			_ => char::from_u32(code).filter(is_printable).map(Self::Char),
		}
	}
}

/// Whether `c` can be inserted into the buffer.
pub fn is_printable(c: &char) -> bool {
	PRINTABLE.contains(c)
}
