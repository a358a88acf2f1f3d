use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod data;
mod ui;
mod viewer;

use data::DataSection;
use ui::UiSection;
use viewer::ViewerSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	viewer: ViewerSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.data.apply_cli_overrides(cli);
		self.viewer.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			debounce: detect_source(
				cli.debounce_ms.is_some(),
				self.viewer.debounce_ms.is_some(),
				"SNIPVIEW__VIEWER__DEBOUNCE_MS",
				"--debounce-ms",
				"viewer.debounce_ms",
			),
			copy_reset: detect_source(
				cli.copy_reset_ms.is_some(),
				self.viewer.copy_reset_ms.is_some(),
				"SNIPVIEW__VIEWER__COPY_RESET_MS",
				"--copy-reset-ms",
				"viewer.copy_reset_ms",
			),
			sidebar_breakpoint: detect_source(
				cli.sidebar_breakpoint.is_some(),
				self.viewer.sidebar_breakpoint.is_some(),
				"SNIPVIEW__VIEWER__SIDEBAR_BREAKPOINT",
				"--sidebar-breakpoint",
				"viewer.sidebar_breakpoint",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"SNIPVIEW__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let data_path = self.data.resolve()?;
		let viewer = self.viewer.finalize();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			data_path,
			viewer,
			initial_query: ui.initial_query,
			theme: ui.theme,
			labels: ui.labels,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
