//! bat-backed highlighting and ANSI to ratatui conversion.

use bat::assets::HighlightingAssets;
use bat::config::{Config, VisibleLines};
use bat::controller::Controller;
use bat::input::Input;
use bat::line_range::LineRanges;
use bat::style::{StyleComponent, StyleComponents};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use snipview_core::Language;

const FALLBACK_BAT_THEME: &str = "Monokai Extended";

/// Syntax highlighter holding bat's bundled syntax and theme assets.
pub struct Highlighter {
	assets: HighlightingAssets,
}

impl Default for Highlighter {
	fn default() -> Self {
		Self::new()
	}
}

impl Highlighter {
	#[must_use]
	pub fn new() -> Self {
		Self {
			assets: HighlightingAssets::from_binary(),
		}
	}

	/// Highlight `code` as `language`, one ratatui line per source line,
	/// prefixed with line numbers.
	///
	/// When bat cannot render the snippet a plain numbered rendering is
	/// returned instead.
	#[must_use]
	pub fn highlight(
		&self,
		code: &str,
		language: Language,
		bat_theme: Option<&str>,
	) -> Vec<Line<'static>> {
		match self.run_bat(code, language, bat_theme) {
			Some(lines) => lines,
			None => {
				log::debug!("bat failed to highlight {language} snippet, rendering plain");
				plain_lines(code)
			}
		}
	}

	fn run_bat(
		&self,
		code: &str,
		language: Language,
		bat_theme: Option<&str>,
	) -> Option<Vec<Line<'static>>> {
		let mut style_components = StyleComponents::default();
		style_components.insert(StyleComponent::LineNumbers);

		let config = Config {
			language: Some(language.token()),
			colored_output: true,
			true_color: true,
			style_components,
			theme: bat_theme.unwrap_or(FALLBACK_BAT_THEME).to_string(),
			visible_lines: VisibleLines::Ranges(LineRanges::all()),
			term_width: 120,
			tab_width: 4,
			..Default::default()
		};

		let controller = Controller::new(&config, &self.assets);
		let input = Input::from_reader(Box::new(std::io::Cursor::new(code.to_string())));

		let mut buffer = String::new();
		match controller.run(vec![input], Some(&mut buffer)) {
			Ok(true) => Some(buffer.lines().map(parse_ansi_line).collect()),
			Ok(false) | Err(_) => None,
		}
	}
}

/// Numbered, unstyled rendering of `code`.
#[must_use]
pub fn plain_lines(code: &str) -> Vec<Line<'static>> {
	code.lines()
		.enumerate()
		.map(|(index, line)| {
			Line::from(vec![
				Span::styled(
					format!("{:>4} ", index + 1),
					Style::default().fg(Color::DarkGray),
				),
				Span::raw(line.to_string()),
			])
		})
		.collect()
}

/// Parse ANSI escape codes into ratatui spans.
fn parse_ansi_line(line: &str) -> Line<'static> {
	let mut spans = Vec::new();
	let mut current_text = String::new();
	let mut current_style = Style::default();
	let mut chars = line.chars().peekable();

	while let Some(ch) = chars.next() {
		if ch != '\x1b' {
			current_text.push(ch);
			continue;
		}

		if !current_text.is_empty() {
			spans.push(Span::styled(
				std::mem::take(&mut current_text),
				current_style,
			));
		}

		if chars.next() == Some('[') {
			let mut code = String::new();
			while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == ';') {
				code.push(c);
			}
			if chars.next() == Some('m') {
				current_style = apply_sgr(&code, current_style);
			}
		}
	}

	if !current_text.is_empty() {
		spans.push(Span::styled(current_text, current_style));
	}

	Line::from(spans)
}

/// Apply a `;`-separated SGR parameter list to `style`.
fn apply_sgr(codes: &str, mut style: Style) -> Style {
	let parts: Vec<&str> = codes.split(';').collect();
	let mut i = 0;

	while i < parts.len() {
		let code = if parts[i].is_empty() {
			Ok(0)
		} else {
			parts[i].parse::<u8>()
		};
		match code {
			Ok(0) => style = Style::default(),
			Ok(1) => style = style.add_modifier(Modifier::BOLD),
			Ok(2) => style = style.add_modifier(Modifier::DIM),
			Ok(3) => style = style.add_modifier(Modifier::ITALIC),
			Ok(4) => style = style.add_modifier(Modifier::UNDERLINED),
			Ok(7) => style = style.add_modifier(Modifier::REVERSED),
			Ok(22) => {
				style = style
					.remove_modifier(Modifier::BOLD)
					.remove_modifier(Modifier::DIM)
			}
			Ok(23) => style = style.remove_modifier(Modifier::ITALIC),
			Ok(24) => style = style.remove_modifier(Modifier::UNDERLINED),
			Ok(27) => style = style.remove_modifier(Modifier::REVERSED),
			Ok(n @ 30..=37) => style = style.fg(basic_color(n - 30)),
			Ok(39) => style = style.fg(Color::Reset),
			Ok(n @ 40..=47) => style = style.bg(basic_color(n - 40)),
			Ok(49) => style = style.bg(Color::Reset),
			Ok(n @ 90..=97) => style = style.fg(bright_color(n - 90)),
			Ok(n @ 100..=107) => style = style.bg(bright_color(n - 100)),
			Ok(n @ (38 | 48)) => {
				let (color, consumed) = extended_color(&parts[i + 1..]);
				if let Some(color) = color {
					style = if n == 38 {
						style.fg(color)
					} else {
						style.bg(color)
					};
				}
				i += consumed;
			}
			_ => {}
		}
		i += 1;
	}

	style
}

/// Decode the arguments following 38/48: `5;N` or `2;R;G;B`.
fn extended_color(rest: &[&str]) -> (Option<Color>, usize) {
	match rest {
		["5", n, ..] => (n.parse().ok().map(Color::Indexed), 2),
		["2", r, g, b, ..] => match (r.parse(), g.parse(), b.parse()) {
			(Ok(r), Ok(g), Ok(b)) => (Some(Color::Rgb(r, g, b)), 4),
			_ => (None, 4),
		},
		_ => (None, 0),
	}
}

fn basic_color(index: u8) -> Color {
	match index {
		0 => Color::Black,
		1 => Color::Red,
		2 => Color::Green,
		3 => Color::Yellow,
		4 => Color::Blue,
		5 => Color::Magenta,
		6 => Color::Cyan,
		_ => Color::Gray,
	}
}

fn bright_color(index: u8) -> Color {
	match index {
		0 => Color::DarkGray,
		1 => Color::LightRed,
		2 => Color::LightGreen,
		3 => Color::LightYellow,
		4 => Color::LightBlue,
		5 => Color::LightMagenta,
		6 => Color::LightCyan,
		_ => Color::White,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text_of(line: &Line<'_>) -> String {
		line.spans.iter().map(|span| span.content.as_ref()).collect()
	}

	#[test]
	fn ansi_true_colour_and_reset() {
		let line = parse_ansi_line("\x1b[38;2;255;0;10mfn\x1b[0m main");
		assert_eq!(line.spans.len(), 2);
		assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(255, 0, 10)));
		assert_eq!(line.spans[1].style, Style::default());
		assert_eq!(text_of(&line), "fn main");
	}

	#[test]
	fn ansi_indexed_and_basic_colours() {
		let style = apply_sgr("1;38;5;208;44", Style::default());
		assert_eq!(style.fg, Some(Color::Indexed(208)));
		assert_eq!(style.bg, Some(Color::Blue));
		assert!(style.add_modifier.contains(Modifier::BOLD));
	}

	#[test]
	fn truncated_extended_colour_is_ignored() {
		let style = apply_sgr("38;2;1", Style::default());
		assert_eq!(style.fg, None);
	}

	#[test]
	fn plain_lines_are_numbered() {
		let lines = plain_lines("a\nb");
		assert_eq!(lines.len(), 2);
		insta::assert_snapshot!(text_of(&lines[1]), @"   2 b");
	}

	#[test]
	fn bat_output_keeps_the_source_text() {
		let highlighter = Highlighter::new();
		let lines = highlighter.highlight("let answer = 42;", Language::JavaScript, None);
		assert_eq!(lines.len(), 1);
		assert!(text_of(&lines[0]).contains("let answer = 42;"));
	}
}
