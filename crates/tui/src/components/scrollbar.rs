//! Scrollbar rendering and drag geometry for scrollable panes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Total number of lines in the content.
	pub content_length: usize,
	/// Number of lines visible in the viewport.
	pub viewport_len: usize,
	/// Maximum scroll offset.
	pub max_scroll: usize,
	/// Whether content overflows and needs a scrollbar.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Compute metrics from content length and viewport height. Empty content
	/// or an empty viewport yields the default (no scrolling).
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length - viewport_len,
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Map a scroll offset onto the scrollbar widget's position scale.
	#[must_use]
	pub fn scrollbar_position(&self, scroll: usize) -> usize {
		if self.max_scroll == 0 {
			0
		} else {
			scroll.saturating_mul(self.content_length.saturating_sub(1)) / self.max_scroll
		}
	}

	/// Update a ratatui scrollbar state for `scroll`.
	#[must_use]
	pub fn apply(&self, state: ScrollbarState, scroll: usize) -> ScrollbarState {
		state
			.content_length(self.content_length)
			.viewport_content_length(self.viewport_len)
			.position(self.scrollbar_position(scroll))
	}

	/// Translate a drag on the scrollbar track at `row` into a scroll offset.
	///
	/// `anchor` remembers where inside the thumb the drag started so the
	/// thumb does not jump under the pointer; reset it when the button is
	/// released.
	pub fn drag_to(
		&self,
		track: Rect,
		row: u16,
		current: usize,
		anchor: &mut Option<u16>,
	) -> Option<usize> {
		if track.height == 0 || self.content_length == 0 {
			return None;
		}
		if !self.needs_scrollbar {
			return Some(0);
		}

		let track_height = track.height as usize;
		let thumb_height = thumb_height(track_height, self.viewport_len, self.content_length);
		let track_span = track_height.saturating_sub(thumb_height);
		if track_span == 0 {
			return Some(0);
		}

		let last_row = track.y.saturating_add(track.height).saturating_sub(1);
		let relative = row.clamp(track.y, last_row).saturating_sub(track.y) as usize;
		let thumb_top = current.saturating_mul(track_span) / self.max_scroll;
		let grip = *anchor.get_or_insert_with(|| {
			relative
				.saturating_sub(thumb_top)
				.min(thumb_height.saturating_sub(1)) as u16
		}) as usize;

		let desired_top = relative.saturating_sub(grip).min(track_span);
		Some(self.max_scroll.saturating_mul(desired_top) / track_span)
	}
}

fn thumb_height(track_height: usize, viewport_len: usize, content_len: usize) -> usize {
	if track_height == 0 || content_len == 0 {
		return 0;
	}
	viewport_len
		.saturating_mul(track_height)
		.div_ceil(content_len)
		.clamp(1, track_height)
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Render a themed vertical scrollbar on the right edge of `area`.
///
/// Returns the track rectangle so callers can hit-test drags against it.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.border_color()));

	let track = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, track, state);
	track
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metrics_for_short_content_do_not_scroll() {
		let metrics = ScrollMetrics::compute(5, 10);
		assert_eq!(metrics.viewport_len, 5);
		assert_eq!(metrics.max_scroll, 0);
		assert!(!metrics.needs_scrollbar);
		assert_eq!(ScrollMetrics::compute(0, 10), ScrollMetrics::default());
	}

	#[test]
	fn metrics_for_long_content() {
		let metrics = ScrollMetrics::compute(100, 20);
		assert_eq!(metrics.max_scroll, 80);
		assert!(metrics.needs_scrollbar);
		assert_eq!(metrics.scrollbar_position(80), 99);
	}

	#[test]
	fn dragging_to_the_bottom_reaches_max_scroll() {
		let metrics = ScrollMetrics::compute(100, 10);
		let track = Rect::new(0, 0, 1, 10);
		let mut anchor = None;
		assert_eq!(metrics.drag_to(track, 0, 0, &mut anchor), Some(0));
		assert_eq!(anchor, Some(0));
		assert_eq!(metrics.drag_to(track, 9, 0, &mut anchor), Some(90));
	}

	#[test]
	fn point_in_rect_excludes_edges() {
		let area = Rect::new(2, 2, 3, 3);
		assert!(point_in_rect(2, 2, area));
		assert!(point_in_rect(4, 4, area));
		assert!(!point_in_rect(5, 4, area));
		assert!(!point_in_rect(1, 3, area));
	}
}
