//! Core state container for the terminal front-end.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::ListState;
use snipview_core::{CopyError, ItemId, ViewerController, ViewerEvent, language_of};

use super::code::CodePaneState;
use crate::components::CodeDocument;
use crate::config::UiLabels;
use crate::highlight::Highlighter;
use crate::input::QueryInput;
use crate::outcome::ViewerOutcome;
use crate::style::StyleConfig;

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.controller.teardown();
	}
}

/// Sidebar cursor and geometry.
#[derive(Default)]
pub(crate) struct SidebarState {
	pub list_state: ListState,
	/// Last known sidebar area, `None` while hidden.
	pub area: Option<Rect>,
}

/// Feedback for the most recent copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CopyStatus {
	pub id: ItemId,
	pub ok: bool,
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the controller and listens to its events through a
/// channel; everything it draws is derived from the controller on demand.
pub struct App<'a> {
	pub(crate) controller: ViewerController,
	events: Receiver<ViewerEvent>,
	/// Text input widget for the search query.
	pub search_input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	highlighter: Highlighter,
	highlight_cache: HashMap<ItemId, Vec<Line<'static>>>,
	pub(crate) sidebar: SidebarState,
	pub(crate) code: CodePaneState,
	pub(crate) copy_status: Option<CopyStatus>,
}

impl<'a> App<'a> {
	/// Wrap an initialized controller. The input starts with the
	/// controller's current query.
	pub fn new(mut controller: ViewerController) -> Self {
		let (event_tx, event_rx) = mpsc::channel();
		controller.subscribe(move |event| {
			let _ = event_tx.send(event.clone());
		});

		let mut search_input = QueryInput::new(controller.current_query());
		let style = StyleConfig::default();
		search_input.set_style(style.theme.prompt);

		let mut app = Self {
			controller,
			events: event_rx,
			search_input,
			ui: UiLabels::default(),
			style,
			highlighter: Highlighter::new(),
			highlight_cache: HashMap::new(),
			sidebar: SidebarState::default(),
			code: CodePaneState::new(),
			copy_status: None,
		};
		app.sync_cursor();
		app
	}

	/// Replace the labels rendered around the panes.
	#[must_use]
	pub fn with_labels(mut self, ui: UiLabels) -> Self {
		self.ui = ui;
		self
	}

	/// Apply a new theme and bat theme. Cached highlighting is discarded.
	#[must_use]
	pub fn with_style(mut self, style: StyleConfig) -> Self {
		self.set_style(style);
		self
	}

	pub fn set_style(&mut self, style: StyleConfig) {
		self.search_input.set_style(style.theme.prompt);
		self.style = style;
		self.highlight_cache.clear();
		self.code.dirty = true;
	}

	/// The wrapped controller.
	pub fn controller(&self) -> &ViewerController {
		&self.controller
	}

	/// Drain controller events into UI state.
	pub(crate) fn pump_viewer_events(&mut self) {
		while let Ok(event) = self.events.try_recv() {
			match event {
				ViewerEvent::FilterApplied { visible } => {
					log::trace!("filter applied, {visible} visible");
					self.code.dirty = true;
					self.sync_cursor();
				}
				ViewerEvent::ScrollTo { id } => {
					if let Some(position) = self.controller.filtered_position(id.as_str()) {
						self.sidebar.list_state.select(Some(position));
					}
					self.code.pending_anchor = Some(id);
				}
				ViewerEvent::CopyResult { id, ok } => {
					self.code.dirty = true;
					self.copy_status = Some(CopyStatus { id, ok });
				}
				ViewerEvent::CopyStateReset { id } => {
					self.code.dirty = true;
					if self
						.copy_status
						.as_ref()
						.is_some_and(|status| status.id == id)
					{
						self.copy_status = None;
					}
				}
			}
		}
		self.refresh_document();
	}

	/// Rebuild the code document if it is stale and honour a pending
	/// scroll request.
	pub(crate) fn refresh_document(&mut self) {
		if self.code.dirty {
			self.rebuild_document();
		}
		if let Some(id) = self.code.pending_anchor.take()
			&& let Some(line) = self.code.document.anchor(id.as_str())
		{
			self.scroll_code_to(line);
		}
	}

	fn rebuild_document(&mut self) {
		let mut document = CodeDocument::new();
		let bat_theme = self.style.bat_theme.as_deref();
		for item in self.controller.filtered_items() {
			let language = language_of(item);
			let code = self
				.highlight_cache
				.entry(item.id.clone())
				.or_insert_with(|| self.highlighter.highlight(&item.code, language, bat_theme));
			document.push_snippet(
				item,
				language,
				self.controller.copy_state(item.id.as_str()),
				code,
				&self.style.theme,
			);
		}
		self.code.document = document;
		self.code.dirty = false;
		let scroll = self.code.scroll;
		self.scroll_code_to(scroll);
	}

	/// Keep the sidebar cursor on the active item, or in range otherwise.
	pub(crate) fn sync_cursor(&mut self) {
		let len = self.controller.filtered_len();
		let active = self
			.controller
			.active_item_id()
			.and_then(|id| self.controller.filtered_position(id.as_str()));
		let selected = match (active, self.sidebar.list_state.selected()) {
			_ if len == 0 => None,
			(Some(position), _) => Some(position),
			(None, Some(selected)) => Some(selected.min(len - 1)),
			(None, None) => Some(0),
		};
		self.sidebar.list_state.select(selected);
	}

	/// Id of the item under the sidebar cursor.
	pub(crate) fn cursor_item_id(&self) -> Option<ItemId> {
		let selected = self.sidebar.list_state.selected()?;
		self.controller
			.filtered_items()
			.get(selected)
			.map(|item| item.id.clone())
	}

	/// Move the cursor to `position` and make that item active.
	pub(crate) fn select_position(&mut self, position: usize) -> bool {
		let id = self
			.controller
			.filtered_items()
			.get(position)
			.map(|item| item.id.clone());
		let Some(id) = id else {
			return false;
		};
		self.sidebar.list_state.select(Some(position));
		let selected = self.controller.select_item(id.as_str());
		self.pump_viewer_events();
		selected
	}

	pub(crate) fn scroll_code_to(&mut self, line: usize) {
		let offset = self.code.scroll_to(line);
		self.controller.layout_mut().handle_scroll(offset);
	}

	pub(crate) fn scroll_code_up(&mut self, lines: usize) {
		let offset = self.code.scroll_up(lines);
		self.controller.layout_mut().handle_scroll(offset);
	}

	pub(crate) fn scroll_code_down(&mut self, lines: usize) {
		let offset = self.code.scroll_down(lines);
		self.controller.layout_mut().handle_scroll(offset);
	}

	/// Copy the active item, or the one under the cursor when none is
	/// active. Outcomes surface through controller events.
	pub(crate) fn copy_current(&mut self) {
		let id = self
			.controller
			.active_item_id()
			.cloned()
			.or_else(|| self.cursor_item_id());
		let Some(id) = id else {
			return;
		};
		match self.controller.copy_item(id.as_str()) {
			Ok(()) | Err(CopyError::Clipboard(_)) => {}
			Err(err) => log::debug!("copy of '{id}' not attempted: {err}"),
		}
		self.pump_viewer_events();
	}

	/// Apply any pending query edit and report how the viewer was left.
	pub(crate) fn accept(&mut self) -> ViewerOutcome {
		self.controller.flush_query();
		let selection = self
			.controller
			.active_item()
			.cloned()
			.or_else(|| {
				let id = self.cursor_item_id()?;
				self.controller.item(id.as_str()).cloned()
			});
		ViewerOutcome {
			accepted: true,
			query: self.search_input.text().to_string(),
			selection,
		}
	}

	pub(crate) fn cancel(&self) -> ViewerOutcome {
		ViewerOutcome::cancelled(self.search_input.text())
	}
}
