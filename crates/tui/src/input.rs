//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// The search prompt. Newlines are never inserted; the query is always a
/// single line.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let initial: String = initial.into();
		let single_line = initial.lines().next().unwrap_or_default().to_string();
		let mut textarea = TextArea::new(vec![single_line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// The current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key press to the input. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if key.code == KeyCode::Char('u') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return self.clear();
		}
		let input = Input::from(key);
		if matches!(input.key, Key::Enter) || (input.key == Key::Char('m') && input.ctrl) {
			return false;
		}
		self.textarea.input(input)
	}

	/// Remove all text. Returns `true` when there was anything to remove.
	pub fn clear(&mut self) -> bool {
		if self.text().is_empty() {
			return false;
		}
		self.textarea.move_cursor(CursorMove::Head);
		self.textarea.delete_line_by_end()
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = QueryInput::new("");
		assert!(input.input(press(KeyCode::Char('d'))));
		assert!(input.input(press(KeyCode::Char('b'))));
		assert_eq!(input.text(), "db");
		assert!(input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "d");
	}

	#[test]
	fn enter_never_splits_the_line() {
		let mut input = QueryInput::new("curry");
		assert!(!input.input(press(KeyCode::Enter)));
		assert_eq!(input.text(), "curry");
	}

	#[test]
	fn initial_text_keeps_only_the_first_line() {
		let input = QueryInput::new("first\nsecond");
		assert_eq!(input.text(), "first");
	}

	#[test]
	fn clear_reports_whether_anything_changed() {
		let mut input = QueryInput::new("throttle");
		assert!(input.clear());
		assert_eq!(input.text(), "");
		assert!(!input.clear());
	}

	#[test]
	fn ctrl_u_clears() {
		let mut input = QueryInput::new("memo");
		let changed = input.input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
		assert!(changed);
		assert!(input.text().is_empty());
	}
}
