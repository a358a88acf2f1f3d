//! Code pane state management.

use ratatui::layout::Rect;
use ratatui::widgets::ScrollbarState;
use snipview_core::ItemId;

use crate::components::{CodeDocument, ScrollMetrics, point_in_rect};

/// State for the code pane.
#[derive(Default)]
pub(crate) struct CodePaneState {
	/// Stacked snippet lines for the current filter.
	pub document: CodeDocument,
	/// The document no longer reflects the controller and must be rebuilt.
	pub dirty: bool,
	/// Snippet to scroll to once the document is rebuilt.
	pub pending_anchor: Option<ItemId>,
	/// First visible line.
	pub scroll: usize,
	/// Last known viewport height.
	pub viewport_height: usize,
	pub scrollbar_state: ScrollbarState,
	pub metrics: ScrollMetrics,
	/// Last known code pane area on screen.
	pub area: Option<Rect>,
	/// Screen area of the scrollbar track if rendered.
	pub scrollbar_area: Option<Rect>,
	/// Whether the user is dragging the scrollbar.
	pub dragging: bool,
	/// Mouse offset into the scrollbar thumb when dragging.
	pub drag_anchor: Option<u16>,
}

impl CodePaneState {
	pub fn new() -> Self {
		Self {
			dirty: true,
			..Self::default()
		}
	}

	pub fn max_scroll(&self) -> usize {
		let viewport = self.viewport_height.max(1).min(self.document.len());
		self.document.len().saturating_sub(viewport)
	}

	/// Move to `line`, clamped to the content. Returns the new offset.
	pub fn scroll_to(&mut self, line: usize) -> usize {
		self.scroll = line.min(self.max_scroll());
		self.update_scrollbar();
		self.scroll
	}

	pub fn scroll_up(&mut self, lines: usize) -> usize {
		self.scroll_to(self.scroll.saturating_sub(lines))
	}

	pub fn scroll_down(&mut self, lines: usize) -> usize {
		self.scroll_to(self.scroll.saturating_add(lines))
	}

	/// Recompute metrics for `viewport_height` and clamp the offset.
	pub fn set_viewport(&mut self, viewport_height: usize) {
		self.viewport_height = viewport_height;
		self.update_scrollbar();
	}

	pub fn update_scrollbar(&mut self) {
		self.metrics = ScrollMetrics::compute(self.document.len(), self.viewport_height);
		self.scroll = self.scroll.min(self.metrics.max_scroll);
		self.scrollbar_state = self.metrics.apply(self.scrollbar_state, self.scroll);
	}

	pub fn contains(&self, column: u16, row: u16) -> bool {
		self.area
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	pub fn scrollbar_contains(&self, column: u16, row: u16) -> bool {
		self.scrollbar_area
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	/// Offset for a scrollbar drag at `row`, if the scrollbar is shown.
	pub fn drag_target(&mut self, row: u16) -> Option<usize> {
		let track = self.scrollbar_area?;
		self.metrics
			.drag_to(track, row, self.scroll, &mut self.drag_anchor)
	}

	pub fn release(&mut self) {
		self.dragging = false;
		self.drag_anchor = None;
	}
}
