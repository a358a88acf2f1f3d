use std::time::Duration;

use serde::Deserialize;
use snipview_core::{LayoutConfig, ViewerConfig};

use crate::cli::CliArgs;

/// Timing and layout values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ViewerSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) copy_reset_ms: Option<u64>,
	pub(super) sidebar_breakpoint: Option<u16>,
	pub(super) back_to_top_threshold: Option<usize>,
}

impl ViewerSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.copy_reset_ms {
			self.copy_reset_ms = Some(value);
		}
		if let Some(value) = cli.sidebar_breakpoint {
			self.sidebar_breakpoint = Some(value);
		}
	}

	pub(super) fn finalize(self) -> ViewerConfig {
		let defaults = ViewerConfig::default();
		let layout_defaults = LayoutConfig::default();
		ViewerConfig {
			debounce: self
				.debounce_ms
				.map_or(defaults.debounce, Duration::from_millis),
			copy_reset: self
				.copy_reset_ms
				.map_or(defaults.copy_reset, Duration::from_millis),
			layout: LayoutConfig {
				sidebar_breakpoint: self
					.sidebar_breakpoint
					.unwrap_or(layout_defaults.sidebar_breakpoint),
				back_to_top_threshold: self
					.back_to_top_threshold
					.unwrap_or(layout_defaults.back_to_top_threshold),
			},
		}
	}
}
