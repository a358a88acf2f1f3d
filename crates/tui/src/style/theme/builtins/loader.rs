use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeDocument {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	#[serde(default)]
	bat_theme: Option<String>,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleSpec {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		Ok(Theme {
			header: self.header.to_style(&format!("{context}.header"))?,
			row_highlight: self
				.row_highlight
				.to_style(&format!("{context}.row_highlight"))?,
			prompt: self.prompt.to_style(&format!("{context}.prompt"))?,
			empty: self.empty.to_style(&format!("{context}.empty"))?,
			highlight: self.highlight.to_style(&format!("{context}.highlight"))?,
		})
	}
}

impl StyleSpec {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			let color =
				parse_color(fg).with_context(|| format!("{context}: invalid foreground `{fg}`"))?;
			style = style.fg(color);
		}
		if let Some(bg) = &self.bg {
			let color =
				parse_color(bg).with_context(|| format!("{context}: invalid background `{bg}`"))?;
			style = style.bg(color);
		}
		for modifier in &self.modifiers {
			let modifier = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(modifier);
		}
		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default_theme: Option<(Theme, String)> = None;

	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;
		if is_default {
			if let Some((_, existing)) = &default_theme {
				bail!(
					"multiple built-in themes are marked as default (`{existing}` and `{}`)",
					registration.name
				);
			}
			default_theme = Some((registration.theme, registration.name.clone()));
		}
		registrations.push(registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no built-in theme definitions were found");
	};
	let default_theme = default_theme.map_or(first.theme, |(theme, _)| theme);

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	let document: ThemeDocument = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {path:?}"))?;

	let theme = document.styles.into_theme(&format!("{path:?}"))?;
	let mut registration = ThemeRegistration::new(document.name, theme);
	if let Some(bat_theme) = document.bat_theme {
		registration = registration.with_bat_theme(bat_theme);
	}
	let registration = document
		.aliases
		.into_iter()
		.map(|alias| alias.trim().to_string())
		.filter(|alias| !alias.is_empty())
		.fold(registration, ThemeRegistration::alias);

	Ok((registration, document.default))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		if hex.len() != 6 {
			bail!("hex colours must be 6 characters long");
		}
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16)
				.with_context(|| format!("invalid hex colour `{value}`"))
		};
		return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_str() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_blue" => Ok(Color::LightBlue),
		"light_green" => Ok(Color::LightGreen),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" => Ok(Modifier::REVERSED),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colours_parse_in_every_notation() {
		assert_eq!(parse_color("#1e2030").unwrap(), Color::Rgb(0x1e, 0x20, 0x30));
		assert_eq!(parse_color("244").unwrap(), Color::Indexed(244));
		assert_eq!(parse_color("Dark-Gray").unwrap(), Color::DarkGray);
		assert!(parse_color("#12").is_err());
		assert!(parse_color("chartreuse").is_err());
	}

	#[test]
	fn style_spec_applies_modifiers() {
		let spec = StyleSpec {
			fg: Some("cyan".into()),
			bg: None,
			modifiers: vec!["bold".into()],
		};
		let style = spec.to_style("test").unwrap();
		assert_eq!(style.fg, Some(Color::Cyan));
		assert!(style.add_modifier.contains(Modifier::BOLD));
	}
}
