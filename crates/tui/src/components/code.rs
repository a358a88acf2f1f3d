//! The code pane: every visible snippet stacked into one scrollable document.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, ScrollbarState};
use snipview_core::{Item, ItemId, Language, format_title};

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

/// Marker appended to a snippet header while its "copied" flag is set.
pub const COPIED_MARKER: &str = "✓ copied";

/// Rendered lines for the code pane plus the line each snippet starts at.
#[derive(Debug, Default)]
pub struct CodeDocument {
	lines: Vec<Line<'static>>,
	anchors: Vec<(ItemId, usize)>,
}

impl CodeDocument {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a snippet block: header, description, code, then a blank
	/// separator line.
	pub fn push_snippet(
		&mut self,
		item: &Item,
		language: Language,
		copied: bool,
		code: &[Line<'static>],
		theme: &Theme,
	) {
		self.anchors.push((item.id.clone(), self.lines.len()));

		let mut header = vec![
			Span::styled(format_title(&item.title), theme.header),
			Span::styled(format!("  {language}"), theme.muted_style()),
		];
		if copied {
			header.push(Span::styled(format!("  {COPIED_MARKER}"), theme.highlight));
		}
		self.lines.push(Line::from(header));

		if !item.description.trim().is_empty() {
			self.lines.push(Line::from(Span::styled(
				item.description.clone(),
				theme.muted_style(),
			)));
		}
		self.lines.extend_from_slice(code);
		self.lines.push(Line::default());
	}

	/// First line of the snippet with `id`, if it is in the document.
	#[must_use]
	pub fn anchor(&self, id: &str) -> Option<usize> {
		self.anchors
			.iter()
			.find(|(anchor_id, _)| anchor_id.as_str() == id)
			.map(|(_, line)| *line)
	}

	/// The snippet whose block contains `line`.
	#[must_use]
	pub fn item_at(&self, line: usize) -> Option<&ItemId> {
		let index = self.anchors.partition_point(|(_, start)| *start <= line);
		index.checked_sub(1).map(|index| &self.anchors[index].0)
	}

	#[must_use]
	pub fn lines(&self) -> &[Line<'static>] {
		&self.lines
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.lines.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}
}

/// Argument bundle for rendering the code pane.
pub struct CodePaneContext<'a> {
	pub document: &'a CodeDocument,
	pub scroll: usize,
	pub metrics: ScrollMetrics,
	pub scrollbar_state: &'a mut ScrollbarState,
	pub title: &'a str,
	pub empty_label: &'a str,
	pub theme: &'a Theme,
}

/// Draw the code pane. Returns the scrollbar track when one was drawn.
pub fn render_code_pane(frame: &mut Frame, area: Rect, ctx: CodePaneContext<'_>) -> Option<Rect> {
	let CodePaneContext {
		document,
		scroll,
		metrics,
		scrollbar_state,
		title,
		empty_label,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.header)
		.title(Span::styled(format!(" {title} "), theme.header));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if document.is_empty() {
		let message = Paragraph::new(Span::styled(empty_label.to_string(), theme.empty))
			.alignment(Alignment::Center);
		frame.render_widget(message, inner);
		return None;
	}

	let visible: Vec<Line<'static>> = document
		.lines()
		.iter()
		.skip(scroll)
		.take(inner.height as usize)
		.cloned()
		.collect();

	if !metrics.needs_scrollbar {
		frame.render_widget(Paragraph::new(visible), inner);
		return None;
	}

	let text_area = Rect {
		width: inner.width.saturating_sub(1),
		..inner
	};
	frame.render_widget(Paragraph::new(visible), text_area);
	Some(render_scrollbar(frame, inner, scrollbar_state, theme))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::default_theme;

	fn item(id: &str, description: &str) -> Item {
		Item::new(id, format!("{id}()"), description, "x")
	}

	#[test]
	fn anchors_track_block_starts() {
		let theme = default_theme();
		let code = vec![Line::raw("a"), Line::raw("b")];
		let mut document = CodeDocument::new();
		document.push_snippet(&item("one", "first"), Language::JavaScript, false, &code, &theme);
		document.push_snippet(&item("two", ""), Language::Rust, true, &code, &theme);

		assert_eq!(document.anchor("one"), Some(0));
		// header + description + 2 code lines + separator
		assert_eq!(document.anchor("two"), Some(5));
		assert_eq!(document.anchor("three"), None);
		assert_eq!(document.len(), 9);
		assert_eq!(document.item_at(4).map(ItemId::as_str), Some("one"));
		assert_eq!(document.item_at(5).map(ItemId::as_str), Some("two"));
	}

	#[test]
	fn copied_snippets_carry_the_marker() {
		let theme = default_theme();
		let mut document = CodeDocument::new();
		document.push_snippet(&item("one", ""), Language::Shell, true, &[], &theme);
		let header: String = document.lines()[0]
			.spans
			.iter()
			.map(|span| span.content.as_ref())
			.collect();
		insta::assert_snapshot!(header, @"one  Shell  ✓ copied");
	}
}
