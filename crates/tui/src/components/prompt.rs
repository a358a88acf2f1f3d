use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a QueryInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Right-aligned summary such as `3/12`.
	pub count_label: &'a str,
	/// Whether a query edit is still waiting out its debounce window.
	pub pending: bool,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the prompt row with placeholder and match count.
pub fn render_input(frame: &mut ratatui::Frame, input: InputContext<'_>) {
	let InputContext {
		search_input,
		placeholder,
		count_label,
		pending,
		area,
		theme,
	} = input;

	if area.width == 0 || area.height == 0 {
		return;
	}

	search_input.render_textarea(frame, area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		let display_text: String = placeholder_text.chars().take(area.width as usize).collect();
		frame.buffer_mut().set_line(
			area.left(),
			area.top(),
			&Line::from(Span::styled(display_text, theme.muted_style())),
			area.width,
		);
	}

	render_count(frame, area, count_label, pending, theme);
}

fn render_count(
	frame: &mut ratatui::Frame,
	area: Rect,
	count_label: &str,
	pending: bool,
	theme: &Theme,
) {
	if count_label.is_empty() {
		return;
	}

	let muted_style = theme.muted_style();
	let mut line = Line::default();
	if pending {
		line.spans.push(Span::styled("… ", muted_style));
	}
	line.spans.push(Span::styled(count_label.to_string(), muted_style));

	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let input_row = area.top();

	// Keep clear of the typed text.
	let last_char_x = (area.left()..area.right()).rev().find(|&x| {
		buffer
			.cell((x, input_row))
			.is_some_and(|cell| !cell.symbol().trim().is_empty())
	});
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right() - start_x;
	buffer.set_line(start_x, input_row, &line, max_width);
}
