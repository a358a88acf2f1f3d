use serde::Deserialize;
use snipview_tui::UiLabels;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) filter_label: Option<String>,
	pub(super) sidebar_title: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(label) = cli.filter_label.clone() {
			self.filter_label = Some(label);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(title) = self.title.filter(|title| !title.trim().is_empty()) {
			labels.title = title;
		}
		if let Some(label) = self.filter_label {
			labels.filter_label = label;
		}
		if let Some(title) = self.sidebar_title {
			labels.sidebar_title = title;
		}

		UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self
				.theme
				.map(|theme| theme.trim().to_string())
				.filter(|theme| !theme.is_empty()),
		}
	}
}
