use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) debounce: Option<SettingSource>,
	pub(crate) copy_reset: Option<SettingSource>,
	pub(crate) sidebar_breakpoint: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.debounce
			.clone()
			.unwrap_or(SettingSource::ConfigKey("viewer.debounce_ms"))
	}

	pub(crate) fn source_for_copy_reset(&self) -> SettingSource {
		self.copy_reset
			.clone()
			.unwrap_or(SettingSource::ConfigKey("viewer.copy_reset_ms"))
	}

	pub(crate) fn source_for_sidebar_breakpoint(&self) -> SettingSource {
		self.sidebar_breakpoint
			.clone()
			.unwrap_or(SettingSource::ConfigKey("viewer.sidebar_breakpoint"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}
