mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations().to_vec()
}

/// Names of every built-in theme, in load order.
#[must_use]
pub fn names() -> Vec<String> {
	builtins::registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.collect()
}

/// Look up a theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	find(name).map(|registration| registration.theme)
}

/// The bat theme paired with the named theme, if it declares one.
#[must_use]
pub fn bat_theme(name: &str) -> Option<String> {
	find(name).and_then(|registration| registration.bat_theme.clone())
}

fn find(name: &str) -> Option<&'static ThemeRegistration> {
	builtins::registrations()
		.iter()
		.find(|registration| registration.answers_to(name))
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
