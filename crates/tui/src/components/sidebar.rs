//! Snippet index rendered beside the code pane.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use snipview_core::{Item, format_title};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Theme;

/// Symbol drawn in front of the row under the cursor.
pub const HIGHLIGHT_SYMBOL: &str = "▌ ";
const COPIED_SUFFIX: &str = " ✓";
const ELLIPSIS: char = '…';

/// One row in the sidebar.
pub struct SidebarRow<'a> {
	pub item: &'a Item,
	/// The row is the controller's active item.
	pub active: bool,
	/// The item's "copied" flag is set.
	pub copied: bool,
}

/// Argument bundle for rendering the sidebar.
pub struct SidebarContext<'a> {
	pub rows: Vec<SidebarRow<'a>>,
	pub title: &'a str,
	pub theme: &'a Theme,
}

pub fn render_sidebar(
	frame: &mut Frame,
	area: Rect,
	ctx: SidebarContext<'_>,
	list_state: &mut ListState,
) {
	let SidebarContext { rows, title, theme } = ctx;

	let available = usize::from(area.width.saturating_sub(2))
		.saturating_sub(UnicodeWidthStr::width(HIGHLIGHT_SYMBOL));
	let items: Vec<ListItem> = rows
		.iter()
		.map(|row| sidebar_line(row, available, theme))
		.collect();

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.header)
		.title(Span::styled(format!(" {title} "), theme.header));

	let list = List::new(items)
		.block(block)
		.highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);

	frame.render_stateful_widget(list, area, list_state);
}

fn sidebar_line<'a>(row: &SidebarRow<'_>, available: usize, theme: &Theme) -> ListItem<'a> {
	let title_style = if row.active {
		theme.highlight
	} else {
		ratatui::style::Style::default()
	};
	let budget = if row.copied {
		available.saturating_sub(UnicodeWidthStr::width(COPIED_SUFFIX))
	} else {
		available
	};
	let title = truncate_to_width(&format_title(&row.item.title), budget);
	let mut spans = vec![Span::styled(title, title_style)];
	if row.copied {
		spans.push(Span::styled(COPIED_SUFFIX, theme.highlight));
	}
	ListItem::new(Line::from(spans))
}

/// Shorten `text` to at most `width` columns, marking the cut with an ellipsis.
fn truncate_to_width(text: &str, width: usize) -> String {
	if UnicodeWidthStr::width(text) <= width {
		return text.to_string();
	}
	let mut out = String::new();
	let mut used = 0;
	let budget = width.saturating_sub(1);
	for ch in text.chars() {
		let w = ch.width().unwrap_or(0);
		if used + w > budget {
			break;
		}
		used += w;
		out.push(ch);
	}
	if width > 0 {
		out.push(ELLIPSIS);
	}
	out
}

/// Map a click at screen `row` to an index into the sidebar rows.
///
/// `area` is the full sidebar including its border and `offset` is the
/// list's scroll offset.
#[must_use]
pub fn row_at(area: Rect, offset: usize, row: u16, len: usize) -> Option<usize> {
	let first = area.y.saturating_add(1);
	let last = area.y.saturating_add(area.height).saturating_sub(1);
	if row < first || row >= last {
		return None;
	}
	let index = offset + usize::from(row - first);
	(index < len).then_some(index)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clicks_map_inside_the_border() {
		let area = Rect::new(0, 2, 20, 6);
		assert_eq!(row_at(area, 0, 2, 10), None);
		assert_eq!(row_at(area, 0, 3, 10), Some(0));
		assert_eq!(row_at(area, 4, 4, 10), Some(5));
		assert_eq!(row_at(area, 0, 7, 10), None);
		assert_eq!(row_at(area, 0, 5, 2), None);
	}

	#[test]
	fn long_titles_are_cut_by_display_width() {
		assert_eq!(truncate_to_width("short", 10), "short");
		assert_eq!(truncate_to_width("debounce helper", 8), "debounc…");
		assert_eq!(truncate_to_width("日本語タイトル", 5), "日本…");
		assert_eq!(truncate_to_width("anything", 0), "");
	}
}
