//! Visual styling utilities.
//!
//! Themes carry the colour scheme applied to the terminal UI; the bat theme
//! paired with a theme drives syntax highlighting in the code pane.

/// Theme definitions and the built-in theme registry.
pub mod theme;

pub use theme::{
	Theme, ThemeRegistration, bat_theme, builtin_themes, by_name, default_theme, names,
};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
	/// bat theme used to highlight code, `None` for bat's default.
	pub bat_theme: Option<String>,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self {
			theme,
			bat_theme: None,
		}
	}

	/// Resolve a built-in theme and its paired bat theme by name or alias.
	#[must_use]
	pub fn named(name: &str) -> Option<Self> {
		let theme = by_name(name)?;
		Some(Self {
			theme,
			bat_theme: bat_theme(name),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn named_styles_pick_up_the_bat_theme() {
		let style = StyleConfig::named("light").expect("alias resolves");
		assert_eq!(style.bat_theme.as_deref(), Some("GitHub"));
		assert!(StyleConfig::named("nope").is_none());
	}
}
