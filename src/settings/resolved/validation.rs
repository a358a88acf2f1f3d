use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

const MAX_DEBOUNCE: Duration = Duration::from_secs(5);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let viewer = &config.viewer;

	if viewer.debounce > MAX_DEBOUNCE {
		return Err(ConfigError::invalid(
			"viewer.debounce_ms",
			viewer.debounce.as_millis().to_string(),
			sources.source_for_debounce(),
			"must be at most 5000",
		));
	}

	if viewer.copy_reset.is_zero() {
		return Err(ConfigError::invalid(
			"viewer.copy_reset_ms",
			"0",
			sources.source_for_copy_reset(),
			"must be greater than zero",
		));
	}

	if viewer.layout.sidebar_breakpoint == 0 {
		return Err(ConfigError::invalid(
			"viewer.sidebar_breakpoint",
			"0",
			sources.source_for_sidebar_breakpoint(),
			"must be at least 1",
		));
	}

	if let Some(theme) = &config.theme
		&& snipview_tui::style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!(
				"unknown theme; available: {}",
				snipview_tui::style::names().join(", ")
			),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use snipview_core::ViewerConfig;
	use snipview_tui::UiLabels;

	use super::*;
	use crate::settings::resolved::SettingSource;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			data_path: PathBuf::from("/tmp/snippets.json"),
			viewer: ViewerConfig::default(),
			initial_query: String::new(),
			theme: None,
			labels: UiLabels::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn zero_copy_reset_is_rejected() {
		let mut config = config();
		config.viewer.copy_reset = Duration::ZERO;
		let sources = ConfigSources {
			copy_reset: Some(SettingSource::CliFlag("--copy-reset-ms")),
			..ConfigSources::default()
		};

		let error = validate(&config, &sources).expect_err("copy reset must be positive");
		assert_eq!(error.key, "viewer.copy_reset_ms");
		assert!(error.to_string().contains("--copy-reset-ms"));
	}

	#[test]
	fn long_debounce_is_rejected() {
		let mut config = config();
		config.viewer.debounce = Duration::from_secs(6);

		let error = validate(&config, &ConfigSources::default()).expect_err("too long");
		assert_eq!(error.key, "viewer.debounce_ms");
		assert_eq!(error.value, "6000");
	}

	#[test]
	fn zero_breakpoint_is_rejected() {
		let mut config = config();
		config.viewer.layout.sidebar_breakpoint = 0;

		let error = validate(&config, &ConfigSources::default()).expect_err("breakpoint");
		assert_eq!(error.key, "viewer.sidebar_breakpoint");
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let mut config = config();
		config.theme = Some("light".into());
		assert!(validate(&config, &ConfigSources::default()).is_ok());

		config.theme = Some("neon".into());
		let error = validate(&config, &ConfigSources::default()).expect_err("unknown theme");
		assert!(error.reason.contains("slate"));
	}
}
