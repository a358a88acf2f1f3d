use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::components::point_in_rect;
use crate::components::sidebar::row_at;
use crate::outcome::ViewerOutcome;

const PAGE_LINES: usize = 10;
const WHEEL_LINES: usize = 3;

impl App<'_> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<ViewerOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return Some(self.cancel()),
			KeyCode::Esc if self.search_input.text().is_empty() => return Some(self.cancel()),
			KeyCode::Esc => {
				self.search_input.clear();
				self.controller.clear_query();
				self.pump_viewer_events();
			}
			KeyCode::Enter => return Some(self.accept()),
			KeyCode::Char('y') if ctrl => self.copy_current(),
			KeyCode::Char('b') if ctrl => self.controller.layout_mut().toggle_sidebar(),
			KeyCode::Up => self.move_cursor_up(),
			KeyCode::Down => self.move_cursor_down(),
			KeyCode::PageUp => self.scroll_code_up(PAGE_LINES),
			KeyCode::PageDown => self.scroll_code_down(PAGE_LINES),
			KeyCode::Home => self.scroll_code_to(0),
			_ => {
				if self.search_input.input(key) {
					self.controller.set_query(self.search_input.text());
				}
			}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		let over_sidebar = self
			.sidebar
			.area
			.is_some_and(|area| point_in_rect(column, row, area));

		match mouse.kind {
			MouseEventKind::ScrollUp if self.code.contains(column, row) => {
				self.scroll_code_up(WHEEL_LINES);
			}
			MouseEventKind::ScrollDown if self.code.contains(column, row) => {
				self.scroll_code_down(WHEEL_LINES);
			}
			MouseEventKind::ScrollUp if over_sidebar => self.move_cursor_up(),
			MouseEventKind::ScrollDown if over_sidebar => self.move_cursor_down(),
			MouseEventKind::Down(MouseButton::Left) if self.code.scrollbar_contains(column, row) => {
				self.code.drag_anchor = None;
				self.code.dragging = true;
				self.drag_code_scrollbar_to(row);
			}
			MouseEventKind::Down(MouseButton::Left) if over_sidebar => {
				self.select_row_at(row);
			}
			MouseEventKind::Drag(MouseButton::Left) if self.code.dragging => {
				self.drag_code_scrollbar_to(row);
			}
			MouseEventKind::Up(MouseButton::Left) => self.code.release(),
			_ => {}
		}
	}

	/// Track a terminal resize in the controller's layout flags.
	pub(crate) fn handle_resize(&mut self, width: u16) {
		self.controller.layout_mut().handle_resize(width);
	}

	fn move_cursor_up(&mut self) {
		match self.sidebar.list_state.selected() {
			Some(selected) if selected > 0 => {
				self.select_position(selected - 1);
			}
			Some(_) => {}
			None => {
				self.select_position(0);
			}
		}
	}

	fn move_cursor_down(&mut self) {
		let next = self
			.sidebar
			.list_state
			.selected()
			.map_or(0, |selected| selected + 1);
		if next < self.controller.filtered_len() {
			self.select_position(next);
		}
	}

	fn select_row_at(&mut self, row: u16) -> bool {
		let Some(area) = self.sidebar.area else {
			return false;
		};
		let offset = self.sidebar.list_state.offset();
		match row_at(area, offset, row, self.controller.filtered_len()) {
			Some(position) => self.select_position(position),
			None => false,
		}
	}

	fn drag_code_scrollbar_to(&mut self, row: u16) {
		if let Some(offset) = self.code.drag_target(row) {
			self.scroll_code_to(offset);
		}
	}
}
