use ratatui::style::{Color, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for borders, titles and the snippet headers in the code pane.
	pub header: Style,
	/// Style for the highlighted sidebar row.
	pub row_highlight: Style,
	/// Style for the search prompt.
	pub prompt: Style,
	/// Style for empty states and secondary text.
	pub empty: Style,
	/// Style for accents such as the "copied" marker.
	pub highlight: Style,
}

impl Theme {
	/// Foreground used for borders and scrollbars.
	#[must_use]
	pub fn border_color(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	/// Style for descriptions and hints.
	#[must_use]
	pub fn muted_style(&self) -> Style {
		Style::new().fg(self.empty.fg.unwrap_or(Color::Gray))
	}
}

/// Describes a theme instance that can be registered with the UI.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
	/// Optional bat syntax highlighting theme name.
	pub bat_theme: Option<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
			bat_theme: None,
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Sets the bat syntax highlighting theme name.
	pub fn with_bat_theme(mut self, bat_theme: impl Into<String>) -> Self {
		self.bat_theme = Some(bat_theme.into());
		self
	}

	/// Whether `name` refers to this registration, ignoring case.
	pub fn answers_to(&self, name: &str) -> bool {
		let wanted = name.trim();
		self.name.eq_ignore_ascii_case(wanted)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(wanted))
	}
}
